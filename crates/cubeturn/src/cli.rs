use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use cubeturn_core::{CubeState, Face, ScrambleParams, ScrambleType};
use cubeturn_prefs::Preferences;
use cubeturn_view::{Action, AnimationSnapshot, CubeSimulation};
use eyre::{Result, WrapErr};
use serde::Serialize;

/// Terminal driver for a 3x3x3 twisty cube simulator.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to layer over the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// Print the net using face symbols instead of colors.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply key presses to a solved cube and print the result.
    ///
    /// `1`-`6` turn the front, back, right, left, top, and bottom faces;
    /// space scrambles; `r` resets.
    Turn {
        /// Keys to press, in order.
        keys: String,
    },
    /// Scramble a cube and print the result.
    Scramble {
        /// Random seed. Combined with `--time`, always produces the same
        /// scramble.
        #[arg(long)]
        seed: Option<String>,
        /// Time of the scramble, in RFC 3339 format. Defaults to now.
        #[arg(long)]
        time: Option<DateTime<Utc>>,
        /// Scramble with this many random legal turns instead of sticker
        /// swaps.
        #[arg(long, conflicts_with = "swaps")]
        twists: Option<u32>,
        /// Number of random sticker swaps.
        #[arg(long)]
        swaps: Option<u32>,
        /// Print a JSON report instead of the net.
        #[arg(long)]
        json: bool,
    },
    /// Turn one face and print each frame of its animation.
    Animate {
        /// Face to turn, such as `front`, `F`, or `1`.
        face: Face,
        /// Print one JSON object per frame.
        #[arg(long)]
        json: bool,
    },
    /// Print the preferences in effect as YAML.
    Prefs {
        /// Write the preferences to this file instead of printing them.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref())?;
    let print_net = |state: &CubeState| {
        if args.plain {
            print!("{state}");
        } else {
            let colors = &prefs.colors;
            print!("{}", crate::net::ColoredNet { state, colors });
        }
    };

    match args.subcommand {
        Subcommand::Turn { keys } => {
            let actions = Action::parse_keys(&keys).wrap_err("bad key sequence")?;
            let sim = run_actions(&prefs, actions);
            print_net(sim.state());
            println!("turns: {}", sim.turn_count());
            Ok(())
        }

        Subcommand::Scramble {
            seed,
            time,
            twists,
            swaps,
            json,
        } => {
            let ty = match (twists, swaps) {
                (Some(n), _) => ScrambleType::Twists(n),
                (None, Some(n)) => ScrambleType::StickerSwaps(n),
                (None, None) => prefs.scramble.ty(),
            };
            let params = match seed {
                Some(seed) => {
                    ScrambleParams::with_seed(ty, time.unwrap_or_else(Utc::now), seed)
                }
                None => ScrambleParams::new(ty),
            };
            let scrambled = CubeState::new_scrambled(params);

            if json {
                println!("{}", serde_json::to_string_pretty(&scrambled)?);
            } else {
                print_net(&scrambled.state);
                println!("seed: {}", scrambled.params.seed);
                let time = scrambled.params.time;
                println!("time: {}", time.to_rfc3339_opts(SecondsFormat::Millis, true));
            }
            Ok(())
        }

        Subcommand::Animate { face, json } => {
            let mut sim = CubeSimulation::new(&prefs);
            sim.trigger_turn(face);
            let mut frame = 0;
            loop {
                let snapshot = sim.animation();
                if json {
                    let line = FrameReport { frame, snapshot };
                    println!("{}", serde_json::to_string(&line)?);
                } else {
                    println!(
                        "frame {frame:>3}  angle {:>8.3}  remaining {:>8.3}  {}",
                        snapshot.angle,
                        snapshot.remaining_angle,
                        if snapshot.is_rotating { "rotating" } else { "idle" },
                    );
                }
                if !sim.tick() {
                    break;
                }
                frame += 1;
            }
            Ok(())
        }

        Subcommand::Prefs { output } => {
            match output {
                Some(path) => prefs.save(&path)?,
                None => print!("{}", prefs.to_yaml()?),
            }
            Ok(())
        }
    }
}

/// Runs a sequence of actions as if each key were pressed after the previous
/// turn finished animating.
fn run_actions(prefs: &Preferences, actions: impl IntoIterator<Item = Action>) -> CubeSimulation {
    let mut sim = CubeSimulation::new(prefs);
    for action in actions {
        if !sim.apply(action) {
            log::warn!("{action:?} had no effect");
        }
        sim.finish_animation();
    }
    sim
}

#[derive(Serialize)]
struct FrameReport {
    frame: usize,
    #[serde(flatten)]
    snapshot: AnimationSnapshot,
}
