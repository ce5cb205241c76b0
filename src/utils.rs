use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Install the log subscriber.
///
/// Logs are written to stderr so stdout holds nothing but report lines and
/// can be piped or diffed as-is. Only `fitcalc` events are shown at the
/// chosen level (see `level_name`); dependencies stay at WARN. Setting
/// `RUST_LOG` replaces the whole filter.
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = level_name(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitcalc={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Each `-v` raises and each `-q` lowers the level one step from INFO,
/// clamped to TRACE and ERROR.
fn level_name(verbose: u8, quiet: u8) -> &'static str {
    let net = i16::from(verbose) - i16::from(quiet);
    match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    }
}

/// Floor division of two floats, rounding toward negative infinity.
///
/// Computed from the remainder rather than `(x / y).floor()` so that
/// `x == floor_div(x, y) * y + r` holds with `r` carrying the sign of `y`.
/// A zero divisor yields NaN.
pub fn floor_div(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return f64::NAN;
    }

    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }

    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
