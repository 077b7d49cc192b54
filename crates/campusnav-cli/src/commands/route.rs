//! Route command handler.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Args, ValueEnum};

use campusnav_lib::{
    alternative_routes, plan_route, AccessibilityModel, AccessibilityNeeds, CampusMap, Route,
    RouteAdvisor, RouteAlgorithm, RouteRequest, RouteSummary, TrafficModel, WeatherModel,
};

/// Arguments for the route subcommand.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Starting location name.
    #[arg(long = "from")]
    pub from: String,

    /// Destination location name.
    #[arg(long = "to")]
    pub to: String,

    /// Algorithm to use when planning the route.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    pub algorithm: AlgorithmArg,

    /// Landmark name fragments the route should pass through.
    #[arg(long = "via")]
    pub via: Vec<String>,

    /// Number of alternative route suggestions (capped at 3).
    #[arg(long, default_value_t = 1)]
    pub alternatives: usize,

    /// Departure time (HH:MM); enables the traffic and weather advisories.
    #[arg(long)]
    pub departure: Option<String>,

    /// Accessibility profile; enables the accessibility advisory.
    #[arg(long, value_enum)]
    pub access: Option<AccessArg>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    Dijkstra,
    AStar,
    FloydWarshall,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::FloydWarshall => RouteAlgorithm::FloydWarshall,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessArg {
    Standard,
    Wheelchair,
    Elderly,
    VisuallyImpaired,
    MobilityImpaired,
}

impl From<AccessArg> for AccessibilityNeeds {
    fn from(value: AccessArg) -> Self {
        match value {
            AccessArg::Standard => AccessibilityNeeds::Standard,
            AccessArg::Wheelchair => AccessibilityNeeds::Wheelchair,
            AccessArg::Elderly => AccessibilityNeeds::Elderly,
            AccessArg::VisuallyImpaired => AccessibilityNeeds::VisuallyImpaired,
            AccessArg::MobilityImpaired => AccessibilityNeeds::MobilityImpaired,
        }
    }
}

pub fn run(map: &CampusMap, args: &RouteArgs) -> Result<()> {
    let request = RouteRequest::new(&args.from, &args.to)
        .with_algorithm(args.algorithm.into())
        .with_landmarks(args.via.clone())
        .with_alternatives(args.alternatives);

    if args.alternatives > 1 {
        return run_alternatives(map, &request, args.json);
    }

    let route = plan_route(map, &request)?;
    let summary = RouteSummary::from_route(&route)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print!("{}", summary.render_text());
    print_advisories(&route, args)?;
    Ok(())
}

fn run_alternatives(map: &CampusMap, request: &RouteRequest, json: bool) -> Result<()> {
    let routes = alternative_routes(map, request)?;
    let summaries = routes
        .iter()
        .map(RouteSummary::from_route)
        .collect::<campusnav_lib::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for (index, summary) in summaries.iter().enumerate() {
        println!("Option {}:", index + 1);
        print!("{}", summary.render_text());
        println!();
    }
    Ok(())
}

fn print_advisories(route: &Route, args: &RouteArgs) -> Result<()> {
    let mut advisors: Vec<Box<dyn RouteAdvisor>> = Vec::new();

    if let Some(departure) = &args.departure {
        let departure = NaiveTime::parse_from_str(departure, "%H:%M")
            .with_context(|| format!("invalid departure time '{departure}', expected HH:MM"))?;
        advisors.push(Box::new(TrafficModel::sample(departure)));
        advisors.push(Box::new(WeatherModel::sample()));
    }
    if let Some(access) = args.access {
        advisors.push(Box::new(AccessibilityModel::sample(access.into())));
    }

    for advisor in &advisors {
        let advisory = advisor.assess(&route.stops, route.distance, route.time);
        println!();
        println!(
            "{} advisory: {:.1} s ({:.1} min)",
            advisor.name(),
            advisory.adjusted_time,
            advisory.adjusted_time / 60.0
        );
        for note in &advisory.notes {
            println!("- {note}");
        }
    }
    Ok(())
}
