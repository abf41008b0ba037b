use std::time::Duration;

use clap::Parser;

/// Conway's Game of Life on a square board, seeded from standard input.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Args {
    /// ms to wait between generations
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// stop after N generations even if cells are still alive
    #[arg(long)]
    pub generations: Option<u64>,

    /// redraw in place instead of scrolling
    #[arg(long, default_value_t = false)]
    pub clear: bool,
}

impl Args {
    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let a = Args::try_parse_from(["console_life"]).unwrap();
        assert_eq!(a.delay(), Duration::from_secs(1));
        assert_eq!(a.generations, None);
        assert!(!a.clear);
    }

    #[test]
    fn overrides() {
        let a = Args::try_parse_from([
            "console_life", "--delay-ms", "0", "--generations", "12", "--clear",
        ])
        .unwrap();
        assert_eq!(a.delay(), Duration::ZERO);
        assert_eq!(a.generations, Some(12));
        assert!(a.clear);
    }

    #[test]
    fn rejects_bad_delay() {
        assert!(Args::try_parse_from(["console_life", "--delay-ms", "soon"]).is_err());
    }
}
