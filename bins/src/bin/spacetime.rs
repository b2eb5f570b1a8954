// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Spacetime project*
//!
//! The `spacetime` command line tool.  Runs the temporal coordinate model's
//! queries against JSON datasets on disk and prints the results as JSON.
//!

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use spacetime_core::{
    AppState, DEFAULT_RELATED_COUNT, DEFAULT_SEARCH_LIMIT, EraJump, EventCategory, EventDataset,
    LinearScale, OverviewScale, Regions, Significance, Viewport, ViewportError, Ybp, era_bands,
    format_ybp, regions_from_path, simulation_boundary_x, zoom_config, zoom_ticks,
};
use std::{collections::BTreeSet, error::Error, path::PathBuf};

#[macro_use]
extern crate log;

/// Entry point for the command line tool
fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("spacetime")
        .build();

    let level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    debug!("{args:?}");

    match args.command {
        Command::Zoom { viewport } => {
            let viewport = viewport.validated()?;
            print_json(zoom_config(viewport.span()))
        }
        Command::Clamp { viewport } => {
            // Creating a viewport clamps it
            print_json(&viewport.validated()?)
        }
        Command::Scale { viewport, ybp, px } => {
            let scale = LinearScale::from(&viewport.validated()?);
            let mut mappings: Vec<Mapping> = ybp
                .into_iter()
                .map(|ybp| Mapping {
                    ybp,
                    px: scale.forward(ybp),
                })
                .collect();
            mappings.extend(px.into_iter().map(|px| Mapping {
                ybp: scale.inverse(px),
                px,
            }));
            print_json(&json!({
                "pxPerYear": scale.px_per_year(),
                "mappings": mappings,
            }))
        }
        Command::Overview { width, ybp, px } => {
            if !(width.is_finite() && width > 0.0) {
                return Err(format!("Overview width `{width}` must be greater than 0").into());
            }
            let scale = OverviewScale::from(width);
            let mut mappings: Vec<Mapping> = ybp
                .into_iter()
                .map(|ybp| Mapping {
                    ybp,
                    px: scale.forward(ybp),
                })
                .collect();
            mappings.extend(px.into_iter().map(|px| Mapping {
                ybp: scale.inverse(px),
                px,
            }));
            print_json(&mappings)
        }
        Command::Eras { viewport } => {
            let viewport = viewport.validated()?;
            print_json(&json!({
                "bands": era_bands(&viewport),
                "simulationBoundaryX": simulation_boundary_x(&viewport),
            }))
        }
        Command::Ticks { viewport } => {
            let viewport = viewport.validated()?;
            let label_format = zoom_config(viewport.span()).label_format;
            let ticks: Vec<_> = zoom_ticks(&viewport)
                .into_iter()
                .map(|ybp| json!({ "ybp": ybp, "label": format_ybp(ybp, Some(label_format)) }))
                .collect();
            print_json(&ticks)
        }
        Command::Visible {
            events,
            viewport,
            category,
            min_significance,
        } => {
            let dataset = EventDataset::from_path(events)?;
            let mut state = AppState::new();
            state.set_viewport(viewport.validated()?);
            state.set_min_significance(min_significance);
            if !category.is_empty() {
                state.set_all_categories(false);
                for category in category.into_iter().collect::<BTreeSet<_>>() {
                    state.toggle_category(category);
                }
            }
            let visible = state.visible_events(&dataset);
            info!("{} of {} events visible", visible.len(), dataset.len());
            print_json(&visible)
        }
        Command::Related { events, id, count } => {
            let dataset = EventDataset::from_path(events)?;
            let event = dataset
                .event_by_id(&id)
                .ok_or_else(|| format!("No event has the ID `{id}`"))?;
            print_json(&dataset.related_events(event, count))
        }
        Command::Search {
            events,
            query,
            limit,
        } => {
            let dataset = EventDataset::from_path(events)?;
            print_json(&dataset.search(&query, limit))
        }
        Command::Tagged { events, expr } => {
            let dataset = EventDataset::from_path(events)?;
            let bool_tag_expr =
                bool_tag_expr::BoolTagExpr::from(expr).map_err(|error| error.to_string())?;
            print_json(&dataset.matching_tag_expr(&bool_tag_expr))
        }
        Command::Region {
            regions,
            id,
            year,
            viewport,
        } => {
            let regions = regions_from_path(regions)?;
            let viewport = viewport.validated()?;
            let year = year.unwrap_or(viewport.midpoint());
            match id {
                Some(id) => print_json(&region_json(&regions, &id, year)),
                None => {
                    let visible: Vec<_> = regions
                        .regions_for_viewport(&viewport)
                        .into_iter()
                        .map(|region| region_json(&regions, region.id(), year))
                        .collect();
                    print_json(&visible)
                }
            }
        }
        Command::Jump { target, width } => print_json(&jump(target, width)?),
    }
}

/// Spacetime CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Spacetime tool for querying the timeline's temporal coordinate model",
    after_help = "Times are in years before present (YBP): negative is the past, positive is \
                  the simulated future"
)]
pub struct Cli {
    /// Log everything the library does
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the zoom tier for a viewport
    Zoom {
        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Clamp a viewport into the legal time range
    Clamp {
        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Map times to pixels (and pixels to times) across a viewport
    Scale {
        #[command(flatten)]
        viewport: ViewportArgs,

        /// Times to map to pixels
        #[arg(long, allow_negative_numbers = true)]
        ybp: Vec<Ybp>,

        /// Pixels to map to times
        #[arg(long, allow_negative_numbers = true)]
        px: Vec<f64>,
    },

    /// Map times to pixels (and pixels to times) on the overview strip
    Overview {
        /// Width (in pixels) of the overview strip
        #[arg(long, default_value_t = 1_200.0)]
        width: f64,

        /// Times to map to pixels
        #[arg(long, allow_negative_numbers = true)]
        ybp: Vec<Ybp>,

        /// Pixels to map to times
        #[arg(long, allow_negative_numbers = true)]
        px: Vec<f64>,
    },

    /// Print the era bands (and the simulation boundary) for a viewport
    Eras {
        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Print the labelled axis ticks for a viewport
    Ticks {
        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Print the events visible in a viewport
    Visible {
        /// Path to the JSON events
        #[arg(long)]
        events: PathBuf,

        #[command(flatten)]
        viewport: ViewportArgs,

        /// Categories to show (all if none are given)
        #[arg(long, value_delimiter = ',', value_parser = parse_category)]
        category: Vec<EventCategory>,

        /// Hide events less significant than this (never lowers the zoom
        /// tier's own minimum)
        #[arg(long, value_parser = parse_significance, default_value = "1")]
        min_significance: Significance,
    },

    /// Print the events most related to an event
    Related {
        /// Path to the JSON events
        #[arg(long)]
        events: PathBuf,

        /// ID of the event to find relations for
        #[arg(long)]
        id: String,

        /// The most events to print
        #[arg(long, default_value_t = DEFAULT_RELATED_COUNT)]
        count: usize,
    },

    /// Search event names, descriptions, and tags
    Search {
        /// Path to the JSON events
        #[arg(long)]
        events: PathBuf,

        query: String,

        /// The most events to print
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Print the events whose tags match a boolean tag expression
    Tagged {
        /// Path to the JSON events
        #[arg(long)]
        events: PathBuf,

        /// e.g. `trade & !war`
        expr: String,
    },

    /// Print a region's name at a year, or every region visible in a viewport
    Region {
        /// Path to the JSON regions
        #[arg(long)]
        regions: PathBuf,

        /// Only this region
        #[arg(long)]
        id: Option<String>,

        /// The year to name regions for (defaults to the viewport's midpoint)
        #[arg(long, allow_negative_numbers = true)]
        year: Option<Ybp>,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Print the viewport for a quick navigation target
    Jump {
        #[arg(value_parser = parse_era_jump)]
        target: EraJump,

        /// Width (in pixels) of the viewport
        #[arg(long, default_value_t = 1_200.0)]
        width: f64,
    },
}

/// The viewport shared by most commands (defaults to recent human history)
#[derive(Args, Debug, Clone, Copy)]
pub struct ViewportArgs {
    /// The earliest visible time
    #[arg(long, allow_negative_numbers = true, default_value_t = -6_000.0)]
    pub start: Ybp,

    /// The latest visible time
    #[arg(long, allow_negative_numbers = true, default_value_t = 100.0)]
    pub end: Ybp,

    /// Width (in pixels) of the viewport
    #[arg(long, default_value_t = 1_200.0)]
    pub width: f64,
}

impl ViewportArgs {
    fn validated(&self) -> Result<Viewport, Box<dyn Error>> {
        Ok(Viewport::from(self.start, self.end, self.width)?)
    }
}

/// The viewport an era jump shows at the given width
fn jump(target: EraJump, width: f64) -> Result<Viewport, ViewportError> {
    let mut state = AppState::new();
    state.resize(width)?;
    state.jump_to_era(target)?;
    Ok(*state.viewport())
}

/// A time and where it's drawn
#[derive(Serialize, Debug)]
struct Mapping {
    ybp: Ybp,
    px: f64,
}

fn region_json(regions: &Regions, region_id: &str, year: Ybp) -> serde_json::Value {
    let region = regions.region_by_id(region_id);
    json!({
        "id": region_id,
        "year": year,
        "displayName": regions.display_name(region_id, year),
        "eraName": region.and_then(|region| region.era_name(year)),
        "color": region.map(|region| region.colour()),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_category(arg: &str) -> Result<EventCategory, String> {
    EventCategory::ALL
        .into_iter()
        .find(|category| category.label().eq_ignore_ascii_case(arg.trim()))
        .ok_or_else(|| {
            let labels = EventCategory::ALL.map(|category| category.label());
            format!("expected one of: {}", labels.join(", "))
        })
}

fn parse_significance(arg: &str) -> Result<Significance, String> {
    let value: i64 = arg.trim().parse().map_err(|error| format!("{error}"))?;
    Significance::try_from(value).map_err(|error| error.to_string())
}

fn parse_era_jump(arg: &str) -> Result<EraJump, String> {
    serde_json::from_value(serde_json::Value::String(arg.trim().to_string())).map_err(|_| {
        let names: Vec<String> = EraJump::ALL
            .iter()
            .filter_map(|jump| serde_json::to_value(jump).ok())
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
        format!("expected one of: {}", names.join(", "))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parsers() {
        assert_eq!(parse_category("military"), Ok(EventCategory::Military));
        assert!(parse_category("sport").is_err());
        assert_eq!(parse_era_jump("big-bang"), Ok(EraJump::BigBang));
        assert!(parse_era_jump("tomorrow").is_err());
        assert_eq!(parse_significance("3").unwrap().value(), 3);
        assert!(parse_significance("6").is_err());
        assert!(parse_significance("three").is_err());
    }

    #[test]
    fn negative_times() {
        let args = Cli::try_parse_from([
            "spacetime", "scale", "--start", "-12000", "--end", "-500", "--ybp", "-6000",
        ])
        .unwrap();
        match args.command {
            Command::Scale { viewport, ybp, .. } => {
                assert_eq!(viewport.start, -12_000.0);
                assert_eq!(ybp, vec![-6_000.0]);
            }
            _ => panic!("expected the scale command"),
        }
    }

    #[test]
    fn zero_width_is_rejected() {
        let args = Cli::try_parse_from(["spacetime", "zoom", "--width", "0"]).unwrap();
        match args.command {
            Command::Zoom { viewport } => assert!(viewport.validated().is_err()),
            _ => panic!("expected the zoom command"),
        }

        assert_eq!(
            jump(EraJump::Future, 0.0),
            Err(ViewportError::InvalidWidth(0.0))
        );
        let viewport = jump(EraJump::Future, 640.0).unwrap();
        assert_eq!(viewport.width(), 640.0);
        assert_eq!(viewport.start_ybp(), -10.0);
    }
}
