use pngolin::png::PngReader;

fn main() {
  let args: Vec<String> = std::env::args().collect();
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let reader = match PngReader::load(path) {
      Ok(reader) => {
        println!("got {} bytes.", reader.contents().len());
        reader
      }
      Err(e) => {
        println!("{e}");
        continue;
      }
    };
    match reader.parse() {
      Ok(chunks) => {
        for (n, chunk) in chunks.iter().enumerate() {
          println!("{n}: {chunk:?}");
          if let Some(bkgd) = chunk.bkgd() {
            if let Some(hex) = bkgd.color_hex() {
              println!("   background color: {hex}");
            }
          }
        }
      }
      Err(e) => println!("{e}"),
    }
  }
}
