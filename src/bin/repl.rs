use dice_notation::SimpleStringifier;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stringifier = SimpleStringifier::new();

    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let notation = line.trim();
        if !notation.is_empty() {
            match dice_notation::roll(notation) {
                Ok(trials) => println!("{}", stringifier.stringify(&trials)),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
