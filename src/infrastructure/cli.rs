use clap::Parser;

use crate::core::countdown::CountdownConfig;
use crate::utils::version;

#[derive(Parser, Debug, Default)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = parse_rate,
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = parse_rate,
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(short, long, value_name = "INT", help = "Days to count down")]
    pub days: Option<i64>,

    #[arg(short = 'H', long, value_name = "INT", help = "Hours to count down (max. 23)")]
    pub hours: Option<i64>,

    #[arg(short, long, value_name = "INT", help = "Minutes to count down (max. 59)")]
    pub minutes: Option<i64>,

    #[arg(short, long, value_name = "INT", help = "Seconds to count down")]
    pub seconds: Option<i64>,

    #[arg(
        short,
        long,
        value_name = "DATETIME",
        help = "Count down to this date and time, e.g. 2030-08-27T23:25:59+02:00"
    )]
    pub until: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Slide title")]
    pub title: Option<String>,
}

/// Rates become timer periods, so they must be finite and positive.
fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("{rate} is not a positive rate"))
    }
}

impl Cli {
    /// Apply countdown flags on top of configured inputs.
    ///
    /// Passing any unit flag replaces all four units, unset ones counting as
    /// zero, so `--minutes 10` means ten minutes rather than ten minutes plus
    /// whatever the config file held.
    pub fn countdown(&self, base: CountdownConfig) -> CountdownConfig {
        let units = [self.days, self.hours, self.minutes, self.seconds];
        let mut countdown = if units.iter().any(Option::is_some) {
            CountdownConfig {
                until: base.until,
                ..CountdownConfig::new(
                    self.days.unwrap_or_default(),
                    self.hours.unwrap_or_default(),
                    self.minutes.unwrap_or_default(),
                    self.seconds.unwrap_or_default(),
                )
            }
        } else {
            base
        };

        if let Some(until) = &self.until {
            countdown.until = Some(until.clone());
        }
        countdown
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::countdown::Countdown;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("slide-countdown").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(
            cli.countdown(CountdownConfig::new(0, 0, 5, 0)),
            CountdownConfig::new(0, 0, 5, 0)
        );
    }

    #[test]
    fn test_unit_flags_replace_configured_units() {
        let cli = parse(&["--minutes", "10", "-H", "1"]);
        assert_eq!(
            cli.countdown(CountdownConfig::new(2, 0, 5, 30)),
            CountdownConfig::new(0, 1, 10, 0)
        );
    }

    #[test]
    fn test_until_flag() {
        let cli = parse(&["--until", "2030-08-27T23:25:59+02:00"]);
        let countdown = cli.countdown(CountdownConfig::new(0, 0, 5, 0));
        assert_eq!(countdown.minutes, 5);
        assert_eq!(countdown.until.as_deref(), Some("2030-08-27T23:25:59+02:00"));
    }

    #[test]
    fn test_rates_must_be_positive() {
        for args in [
            ["--tick-rate", "0"],
            ["--frame-rate", "0"],
            ["--tick-rate", "-4"],
            ["--frame-rate", "inf"],
        ] {
            let result =
                Cli::try_parse_from(std::iter::once("slide-countdown").chain(args));
            assert!(result.is_err(), "{args:?} should be rejected");
        }
        assert_eq!(parse(&["--tick-rate", "0.5"]).tick_rate, 0.5);
    }

    #[test]
    fn test_huge_days_flag() {
        let cli = parse(&["--days", "200000000000000"]);
        let config = cli.countdown(CountdownConfig::default());
        let countdown = Countdown::initialize(&config, chrono::Utc::now());
        assert_eq!(countdown.total_seconds(), i64::MAX);
    }

    #[test]
    fn test_title_flag() {
        let cli = parse(&["--title", "Keynote"]);
        assert_eq!(cli.title.as_deref(), Some("Keynote"));
    }
}
