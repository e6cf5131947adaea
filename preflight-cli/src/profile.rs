use std::fs;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use store::{AircraftProfile, Builtin, ProfileFile, TableKind};

/// Selects a built-in profile by name or loads a profile file from a path.
#[derive(clap::Args)]
pub struct ProfileArg {
    /// Built-in aircraft name or path to a JSON profile file.
    #[clap(long, short, default_value = "c150")]
    pub aircraft: String,
}

impl ProfileArg {
    /// Loads the selected profile and logs any inconsistencies in it.
    pub fn load(&self) -> Result<AircraftProfile> {
        let profile = if let Ok(builtin) = Builtin::from_str(&self.aircraft) {
            builtin.profile()
        } else {
            load_file(Path::new(&self.aircraft))?
        };

        for problem in profile.check() {
            tracing::warn!("Profile {:?}: {problem}", profile.name);
        }
        Ok(profile)
    }
}

fn load_file(path: &Path) -> Result<AircraftProfile> {
    let file = fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let file: ProfileFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse {}", path.display()))?;
    if matches!(file, ProfileFile::Legacy(_)) {
        tracing::info!("Migrating legacy profile {}", path.display());
    }
    Ok(file.resolve())
}

/// Overview of a profile printed by the `profile` subcommand.
#[derive(serde::Serialize)]
pub struct Summary {
    name:         String,
    empty_lb:     f32,
    max_gross_lb: f32,
    reference_lb: f32,
    climb_table:  Option<&'static str>,
    rows:         Vec<(String, usize)>,
    problems:     Vec<String>,
}

impl Summary {
    pub fn new(profile: &AircraftProfile) -> Self {
        let climb_rows = match &profile.climb {
            None => 0,
            Some(store::ClimbTable::Cumulative(entries)) => entries.len(),
            Some(store::ClimbTable::Segmented(segments)) => segments.len(),
        };
        Self {
            name:         profile.name.clone(),
            empty_lb:     profile.weights.empty.into_pounds(),
            max_gross_lb: profile.weights.max_gross.into_pounds(),
            reference_lb: profile.reference_weight().into_pounds(),
            climb_table:  profile.climb.as_ref().map(|table| match table {
                store::ClimbTable::Cumulative(_) => "cumulative",
                store::ClimbTable::Segmented(_) => "segmented",
            }),
            rows:         [
                (TableKind::Climb, climb_rows),
                (TableKind::Takeoff, profile.takeoff.len()),
                (TableKind::Cruise, profile.cruise.len()),
                (TableKind::CompassCard, profile.compass_card.len()),
            ]
            .into_iter()
            .map(|(kind, rows)| (kind.to_string(), rows))
            .collect(),
            problems:     profile.check().iter().map(ToString::to_string).collect(),
        }
    }
}
