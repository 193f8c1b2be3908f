use clap::Args;
use pitchstats::error::PsResult;
use pitchstats::event::{Direction, Half, Point, Side};
use pitchstats::parser::{parse_short_code, CaptureContext};

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Short code, e.g. `10ss8.k`.
    pub code: String,

    /// Clicked pitch point as `X,Y` in meters. Repeat in click order.
    #[arg(short, long = "point", value_parser = parse_point)]
    pub points: Vec<Point>,

    #[arg(long, default_value = "1st")]
    pub half: Half,

    #[arg(long, default_value = "home")]
    pub team: Side,

    #[arg(long, default_value = "right")]
    pub direction: Direction,

    #[arg(long, default_value = "00:00")]
    pub time: String,

    /// Also print the structured record as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("bad X in '{}'", s))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("bad Y in '{}'", s))?;
    Point::from_axes(Some(x), Some(y)).ok_or_else(|| format!("non-finite point '{}'", s))
}

pub fn run(args: LogArgs) -> PsResult<()> {
    let ctx = CaptureContext {
        half: args.half,
        team: args.team,
        direction: args.direction,
        time: args.time,
    };
    let tagged = parse_short_code(&args.code, &args.points, &ctx)?;

    println!("{}", tagged.log_line);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&tagged.event)?);
    }
    Ok(())
}
