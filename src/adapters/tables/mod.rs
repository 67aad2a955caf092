//! Table adapter: CSV loading of the reference data store.
//!
//! Reads the static tabular sources (descriptions, precautions,
//! medications, diets, workouts, drug interactions) into the immutable
//! domain tables. All file locations are injected through [`DataSources`];
//! nothing in here assumes a fixed path.
//!
//! Column headers match the upstream table exports, including the
//! lower-case `disease,workout` headers of the workout table. Extra
//! columns (such as a leftover index column) are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{GuidanceTables, InteractionTable, MedicationTable};

/// Error type for reference table loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Locations of the tabular reference sources.
///
/// Supplied by the caller at startup; typically built from a single data
/// directory via [`DataSources::from_dir`].
#[derive(Debug, Clone)]
pub struct DataSources {
    pub descriptions: PathBuf,
    pub precautions: PathBuf,
    pub medications: PathBuf,
    pub diets: PathBuf,
    pub workouts: PathBuf,
    pub interactions: PathBuf,
}

impl DataSources {
    /// Resolve the conventional table file names inside one directory.
    #[must_use]
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            descriptions: dir.join("description.csv"),
            precautions: dir.join("precautions_df.csv"),
            medications: dir.join("medications.csv"),
            diets: dir.join("diets.csv"),
            workouts: dir.join("workout_df.csv"),
            interactions: dir.join("db_drug_interactions.csv"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DescriptionRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Debug, Deserialize)]
struct PrecautionRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Precaution_1")]
    precaution_1: Option<String>,
    #[serde(rename = "Precaution_2")]
    precaution_2: Option<String>,
    #[serde(rename = "Precaution_3")]
    precaution_3: Option<String>,
    #[serde(rename = "Precaution_4")]
    precaution_4: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MedicationRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Medication")]
    medication: String,
}

#[derive(Debug, Deserialize)]
struct DietRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Diet")]
    diet: String,
}

#[derive(Debug, Deserialize)]
struct WorkoutRow {
    disease: String,
    workout: String,
}

#[derive(Debug, Deserialize)]
struct InteractionRow {
    #[serde(rename = "Drug 1")]
    drug_1: String,
    #[serde(rename = "Drug 2")]
    drug_2: String,
    #[serde(rename = "Interaction Description")]
    description: String,
}

fn rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, LoadError> {
    let wrap = |source: csv::Error| LoadError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(wrap)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(wrap)
}

/// Load the per-disease guidance tables.
///
/// # Errors
/// Returns error if any source file cannot be read or parsed.
pub fn load_guidance(sources: &DataSources) -> Result<GuidanceTables, LoadError> {
    let mut tables = GuidanceTables::new();

    for row in rows::<DescriptionRow>(&sources.descriptions)? {
        tables.push_description(row.disease, row.description);
    }
    for row in rows::<PrecautionRow>(&sources.precautions)? {
        tables.push_precaution_row(
            row.disease,
            [
                row.precaution_1,
                row.precaution_2,
                row.precaution_3,
                row.precaution_4,
            ],
        );
    }
    for row in rows::<DietRow>(&sources.diets)? {
        tables.push_diet(row.disease, row.diet);
    }
    for row in rows::<WorkoutRow>(&sources.workouts)? {
        tables.push_workout(row.disease, row.workout);
    }

    Ok(tables)
}

/// Load the disease-to-medication table.
///
/// # Errors
/// Returns error if the source file cannot be read or parsed.
pub fn load_medications(sources: &DataSources) -> Result<MedicationTable, LoadError> {
    let mut table = MedicationTable::new();
    for row in rows::<MedicationRow>(&sources.medications)? {
        table.push(&row.disease, row.medication);
    }
    Ok(table)
}

/// Load the symmetric drug interaction table.
///
/// # Errors
/// Returns error if the source file cannot be read or parsed.
pub fn load_interactions(sources: &DataSources) -> Result<InteractionTable, LoadError> {
    let mut table = InteractionTable::new();
    let mut count = 0usize;
    for row in rows::<InteractionRow>(&sources.interactions)? {
        table.insert(&row.drug_1, &row.drug_2, row.description);
        count += 1;
    }
    tracing::debug!("Loaded {count} drug interaction pairs");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).expect("Should create file");
        file.write_all(contents.as_bytes()).expect("Should write file");
    }

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        write_file(
            dir.path(),
            "description.csv",
            "Disease,Description\nFungal infection,Caused by fungi.\n",
        );
        write_file(
            dir.path(),
            "precautions_df.csv",
            ",Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4\n\
             0,Fungal infection,bath twice,use clean cloths,,keep area dry\n",
        );
        write_file(
            dir.path(),
            "medications.csv",
            "Disease,Medication\nFungal infection,Fluconazole\nFungal infection,Terbinafine\n",
        );
        write_file(
            dir.path(),
            "diets.csv",
            "Disease,Diet\nFungal infection,Antifungal Diet\n",
        );
        write_file(
            dir.path(),
            "workout_df.csv",
            "disease,workout\nFungal infection,Avoid sugary foods\n",
        );
        write_file(
            dir.path(),
            "db_drug_interactions.csv",
            "Drug 1,Drug 2,Interaction Description\n\
             Warfarin,Aspirin,Increased risk of bleeding.\n",
        );
        dir
    }

    #[test]
    fn test_load_guidance() {
        let dir = fixture_dir();
        let sources = DataSources::from_dir(dir.path());
        let tables = load_guidance(&sources).expect("Should load guidance");

        let guidance = tables.aggregate("Fungal infection");
        assert_eq!(guidance.description, "Caused by fungi.");
        assert_eq!(
            guidance.precautions,
            vec!["bath twice", "use clean cloths", "", "keep area dry"]
        );
        assert_eq!(guidance.diets, vec!["Antifungal Diet"]);
        assert_eq!(guidance.workouts, vec!["Avoid sugary foods"]);
    }

    #[test]
    fn test_load_medications() {
        let dir = fixture_dir();
        let sources = DataSources::from_dir(dir.path());
        let table = load_medications(&sources).expect("Should load medications");
        assert_eq!(
            table.recommend::<&str>("fungal infection", &[]),
            vec!["Fluconazole", "Terbinafine"]
        );
    }

    #[test]
    fn test_load_interactions_is_symmetric() {
        let dir = fixture_dir();
        let sources = DataSources::from_dir(dir.path());
        let table = load_interactions(&sources).expect("Should load interactions");
        assert_eq!(
            table.check_pair("aspirin", "warfarin").interaction,
            "Increased risk of bleeding."
        );
        assert_eq!(
            table.check_pair("warfarin", "aspirin").interaction,
            "Increased risk of bleeding."
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let sources = DataSources::from_dir(dir.path());
        assert!(load_medications(&sources).is_err());
    }
}
