//! Interactive reading of the board size and seed coordinates.

use std::io::{ BufRead, Write };

use tracing::warn;

use crate::{
    error::{ Error, Result },
    proc::Coord,
};

/// Asks questions on `output` and reads one integer per line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {

    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            line: String::new(),
        }
    }

    /// Reads the side length of the board. Must be positive.
    pub fn read_size(&mut self) -> Result<usize> {
        self.prompt("Square size of map?\n")?;
        let size = self.read_int("size")?;
        match usize::try_from(size) {
            Ok(size) if size > 0 => Ok(size),
            _ => {
                warn!(size, "rejected board size");
                Err(Error::NonPositiveSize(size))
            }
        }
    }

    /// Reads how many coordinate pairs follow.
    pub fn read_count(&mut self) -> Result<usize> {
        self.prompt("How many coordinate pairs?\n")?;
        let n = self.read_int("coordinate pair count")?;
        usize::try_from(n).map_err(|_| {
            warn!(n, "rejected pair count");
            Error::NegativeCount(n)
        })
    }

    /// Reads `n` pairs, each checked against a board of `size`.
    /// `x` is the row and `y` the column.
    pub fn read_coords(&mut self, n: usize, size: usize) -> Result<Vec<Coord>> {
        let mut coords = Vec::with_capacity(n);
        for pair in 1..=n {
            self.prompt(&format!("pair {pair}\nx:"))?;
            let x = self.read_int("x")?;
            self.prompt(&format!("pair {pair}\ny:"))?;
            let y = self.read_int("y")?;
            let at = Coord::checked(x, y, size).inspect_err(|_| {
                warn!(pair, x, y, size, "rejected coordinate");
            })?;
            coords.push(at);
        }
        Ok(coords)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_int(&mut self, what: &str) -> Result<i64> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(Error::UnexpectedEof { what: what.into() });
        }
        let text = self.line.trim();
        text.parse().map_err(|_| Error::Malformed {
            what: what.into(),
            input: text.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn reads_a_full_session() {
        let mut p = prompter("5\n2\n1\n2\n 3 \n4\n");
        let size = p.read_size().unwrap();
        let n = p.read_count().unwrap();
        let coords = p.read_coords(n, size).unwrap();
        assert_eq!(size, 5);
        assert_eq!(coords, vec![Coord::new(1, 2), Coord::new(3, 4)]);

        let asked = String::from_utf8(p.output).unwrap();
        assert_eq!(
            asked,
            "Square size of map?\nHow many coordinate pairs?\n\
             pair 1\nx:pair 1\ny:pair 2\nx:pair 2\ny:"
        );
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(matches!(prompter("0\n").read_size(), Err(Error::NonPositiveSize(0))));
        assert!(matches!(prompter("-4\n").read_size(), Err(Error::NonPositiveSize(-4))));
    }

    #[test]
    fn rejects_garbage() {
        let err = prompter("ten\n").read_size().unwrap_err();
        assert!(matches!(err, Error::Malformed { ref input, .. } if input == "ten"));
    }

    #[test]
    fn rejects_negative_count() {
        assert!(matches!(prompter("-1\n").read_count(), Err(Error::NegativeCount(-1))));
    }

    #[test]
    fn zero_pairs_is_fine() {
        let mut p = prompter("0\n");
        let n = p.read_count().unwrap();
        assert!(p.read_coords(n, 3).unwrap().is_empty());
    }

    #[test]
    fn reports_missing_input() {
        let err = prompter("3\n").read_coords(2, 3).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { ref what } if what == "y"));
    }

    #[test]
    fn rejects_single_axis_overflow() {
        let err = prompter("1\n7\n").read_coords(1, 5).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { row: 1, col: 7, size: 5 }));
    }
}
