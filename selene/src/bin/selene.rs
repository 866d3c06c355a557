//! `selene`: print the Moon's orientation and scene transform for a place
//! and time.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use selene::config::ViewerConfig;
use selene::{
    EquatorOptions, FixedLocation, GeoLocation, MeeusEphemeris, MoonOrientation,
    ObservationContext, Renderer, SceneTransform, TextRenderer, TimeProvider, UTC,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "selene")]
#[command(about = "Moon libration, phase, distance and parallactic angle for an observer")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Orientation at a single instant
    Orient {
        #[command(flatten)]
        observer: ObserverArgs,

        /// Days from the base date, fractional and negative allowed
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_days: f64,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// One row per step over a span of days
    Sweep {
        #[command(flatten)]
        observer: ObserverArgs,

        /// Span in days
        #[arg(long, default_value = "29.5")]
        days: f64,

        /// Step in hours (defaults to the configured sweep step)
        #[arg(long)]
        step_hours: Option<f64>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct ObserverArgs {
    /// Base date as ISO 8601 (defaults to now)
    #[arg(long)]
    date: Option<String>,

    /// Observer latitude in degrees, north positive
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
}

/// Everything needed to evaluate one context.
struct Session {
    config: ViewerConfig,
    ephemeris: MeeusEphemeris,
    time: TimeProvider,
    context: ObservationContext,
}

impl Session {
    fn open(config: ViewerConfig, observer: &ObserverArgs) -> Result<Self> {
        let time = match &observer.date {
            Some(text) => {
                let base: UTC = text
                    .parse()
                    .with_context(|| format!("Invalid --date '{}'", text))?;
                TimeProvider::new(base)
            }
            None => TimeProvider::starting_now(),
        };

        let mut location = FixedLocation::new(config.location()?)?;
        if let (Some(lat), Some(lon)) = (observer.lat, observer.lon) {
            location
                .update(lat, lon)
                .context("Invalid --lat/--lon")?;
        }

        let context = ObservationContext::from_providers(&time, &location)?;
        Ok(Self {
            config,
            ephemeris: MeeusEphemeris::default(),
            time,
            context,
        })
    }

    fn options(&self) -> EquatorOptions {
        self.config.equator_options()
    }

    fn row(&self, offset_days: f64) -> Result<Row> {
        let context = self.context.with_offset_days(&self.time, offset_days)?;
        let orientation = context
            .orientation_with(&self.ephemeris, self.options())
            .map_err(|err| {
                let what = if err.is_oracle_failure() {
                    "Ephemeris failed"
                } else if err.is_invalid_location() {
                    "Location rejected"
                } else {
                    "Orientation failed"
                };
                anyhow::Error::new(err).context(format!("{} at offset {} d", what, offset_days))
            })?;
        let transform = self.config.projector().project(&orientation);
        Ok(Row {
            offset_days,
            utc: context.time().to_iso8601(),
            local: local_time(&context.time())?,
            orientation,
            transform,
        })
    }
}

#[derive(Debug, Serialize)]
struct Row {
    offset_days: f64,
    utc: String,
    local: String,
    orientation: MoonOrientation,
    transform: SceneTransform,
}

#[derive(Serialize)]
struct Report<'a> {
    location: LocationOut,
    rows: &'a [Row],
}

#[derive(Serialize)]
struct LocationOut {
    latitude: f64,
    longitude: f64,
}

impl From<GeoLocation> for LocationOut {
    fn from(loc: GeoLocation) -> Self {
        Self {
            latitude: loc.latitude_degrees(),
            longitude: loc.longitude_degrees(),
        }
    }
}

fn local_time(utc: &UTC) -> Result<String> {
    let local = utc.to_datetime()?.with_timezone(&Local);
    Ok(local.format("%Y-%m-%d %H:%M:%S %:z").to_string())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    match cli.command {
        Commands::Orient {
            observer,
            offset_days,
            format,
        } => {
            let session = Session::open(config, &observer)?;
            let rows = [session.row(offset_days)?];
            emit(&session, &rows, format)?;
        }
        Commands::Sweep {
            observer,
            days,
            step_hours,
            format,
        } => {
            let session = Session::open(config, &observer)?;
            let step_days = match step_hours {
                Some(hours) => hours / 24.0,
                None => session.config.sweep.step_days(),
            };
            if !(days.is_finite() && days >= 0.0) {
                bail!("--days must be a non-negative number, got {}", days);
            }
            if !(step_days.is_finite() && step_days > 0.0) {
                bail!("--step-hours must be positive");
            }

            let count = (days / step_days).floor() as usize;
            let rows = (0..=count)
                .map(|i| session.row(i as f64 * step_days))
                .collect::<Result<Vec<_>>>()?;
            emit(&session, &rows, format)?;
        }
    }

    Ok(())
}

fn emit(session: &Session, rows: &[Row], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(session, rows),
        OutputFormat::Json => print_json(session, rows),
        OutputFormat::Csv => {
            print_csv(rows);
            Ok(())
        }
    }
}

fn print_table(session: &Session, rows: &[Row]) -> Result<()> {
    let location = session.context.location();
    println!("Location: {}", location);
    println!(
        "Ephemeris: {} (LST at {:+.4}°)",
        describe(session.options()),
        location.longitude_degrees()
    );

    for row in rows {
        let o = &row.orientation;
        println!();
        println!("Date:        {}  ({})", row.local, row.utc);
        println!("Libration:   lon {:+.4}°  lat {:+.4}°", o.elon, o.elat);
        println!("Distance:    {:.1} km", o.distance_km);
        println!("Phase:       {:.3}° ({})", o.phase_angle_deg, phase_name(o.phase_angle_deg));
        println!("Parallactic: {:+.3}°", o.parallactic_angle_deg);
    }

    println!();
    {
        let mut renderer = TextRenderer::new(std::io::stdout().lock(), session.config.render);
        for row in rows {
            renderer.apply(&row.transform)?;
        }
    }

    if rows.len() > 1 {
        println!("\nTotal rows: {}", rows.len());
    }
    Ok(())
}

fn print_json(session: &Session, rows: &[Row]) -> Result<()> {
    let report = Report {
        location: session.context.location().into(),
        rows,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_csv(rows: &[Row]) {
    println!(
        "offset_days,utc,elon,elat,distance_km,phase_deg,parallactic_deg,rot_y,rot_x,camera_distance,roll_z,light_x,light_y,light_z"
    );
    for row in rows {
        let o = &row.orientation;
        let t = &row.transform;
        println!(
            "{:.6},{},{:.6},{:.6},{:.3},{:.6},{:.6},{:.9},{:.9},{:.9},{:.9},{:e},{:e},{:e}",
            row.offset_days,
            row.utc,
            o.elon,
            o.elat,
            o.distance_km,
            o.phase_angle_deg,
            o.parallactic_angle_deg,
            t.moon_rotation_y,
            t.moon_rotation_x,
            t.camera_distance,
            t.camera_roll_z,
            t.light_direction[0],
            t.light_direction[1],
            t.light_direction[2]
        );
    }
}

fn describe(options: EquatorOptions) -> &'static str {
    match (options.aberration, options.refraction) {
        (true, true) => "apparent (light-time, refraction)",
        (true, false) => "light-time corrected",
        (false, true) => "geometric, refracted",
        (false, false) => "geometric",
    }
}

fn phase_name(phase_deg: f64) -> &'static str {
    match phase_deg {
        p if !(22.5..337.5).contains(&p) => "new",
        p if p < 67.5 => "waxing crescent",
        p if p < 112.5 => "first quarter",
        p if p < 157.5 => "waxing gibbous",
        p if p < 202.5 => "full",
        p if p < 247.5 => "waning gibbous",
        p if p < 292.5 => "last quarter",
        _ => "waning crescent",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orient(args: &[&str]) -> (Session, f64) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Orient {
                observer,
                offset_days,
                ..
            } => (Session::open(ViewerConfig::default(), &observer).unwrap(), offset_days),
            Commands::Sweep { .. } => panic!("expected orient"),
        }
    }

    fn seconds_between(a: &UTC, b: &UTC) -> f64 {
        a.unix_seconds() - b.unix_seconds()
    }

    #[test]
    fn test_fractional_offset_is_used_as_given() {
        let args = ["selene", "orient", "--date", "2024-01-11T00:00:00Z", "--offset-days", "0.3"];
        let (session, offset) = orient(&args);
        let row = session.row(offset).unwrap();
        assert_eq!(row.offset_days, 0.3);

        let expected: UTC = "2024-01-11T07:12:00Z".parse().unwrap();
        let moved = session.context.with_offset_days(&session.time, offset).unwrap();
        assert!(seconds_between(&moved.time(), &expected).abs() < 1e-3);
        assert!(row.utc.starts_with("2024-01-11T07:12:00"), "{}", row.utc);
    }

    #[test]
    fn test_large_and_negative_offsets_are_not_clamped() {
        let (session, offset) = orient(&[
            "selene",
            "orient",
            "--date",
            "2024-01-11T00:00:00Z",
            "--offset-days",
            "20",
        ]);
        assert_eq!(offset, 20.0);
        assert!(session.row(offset).unwrap().utc.starts_with("2024-01-31T00:00:00"));

        let (session, offset) = orient(&[
            "selene",
            "orient",
            "--date",
            "2024-01-11T00:00:00Z",
            "--offset-days",
            "-1.5",
        ]);
        assert!(session.row(offset).unwrap().utc.starts_with("2024-01-09T12:00:00"));
    }

    #[test]
    fn test_offset_past_supported_years_fails() {
        let (session, _) = orient(&["selene", "orient", "--date", "2024-01-11T00:00:00Z"]);
        let err = session.row(200_000.0).unwrap_err();
        assert_eq!(err.to_string(), "Ephemeris failed at offset 200000 d");
    }

    #[test]
    fn test_observer_override() {
        let (session, _) = orient(&[
            "selene",
            "orient",
            "--date",
            "2024-01-11T00:00:00Z",
            "--lat",
            "-33.8688",
            "--lon",
            "151.2093",
        ]);
        assert_eq!(session.context.location().latitude_degrees(), -33.8688);
        assert!(Cli::try_parse_from(["selene", "orient", "--lat", "10"]).is_err());
    }
}
