use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};

/// Asks for a subnet prefix such as `127.0.0` on stdin.
pub fn prompt_subnet() -> anyhow::Result<String> {
    let stdin = io::stdin();
    read_subnet(&mut stdin.lock(), &mut io::stdout())
}

fn read_subnet(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<String> {
    writeln!(output, "\nSubnet address (e.g. 127.0.0):")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading subnet prefix")?;
    if read == 0 {
        bail!("no subnet prefix given");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_and_trims_one_line() {
        let mut input = Cursor::new("192.168.1\n10.0.0\n");
        let mut output = Vec::new();
        assert_eq!(read_subnet(&mut input, &mut output).unwrap(), "192.168.1");
        assert!(String::from_utf8(output).unwrap().contains("Subnet address"));
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut input = Cursor::new("");
        assert!(read_subnet(&mut input, &mut Vec::new()).is_err());
    }
}
