//! Dataset descriptor (`data.yaml`) loading.
//!
//! The descriptor names the class labels and the split directories of an
//! Ultralytics-style YOLO dataset. Both spellings of `names` that appear in
//! the wild are accepted: a plain sequence, or a class-id-to-name mapping.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Yolo2LabelmeError;

/// The split keys recognized in a descriptor, in the fixed order they are
/// searched.
pub const SPLIT_KEYS: [&str; 3] = ["test", "train", "val"];

/// A parsed dataset descriptor.
#[derive(Clone, Debug)]
pub struct Descriptor {
    /// Class labels indexed by YOLO class id.
    pub names: Vec<String>,
    /// Relative path of the `test` split directory, if defined.
    pub test: Option<String>,
    /// Relative path of the `train` split directory, if defined.
    pub train: Option<String>,
    /// Relative path of the `val` split directory, if defined.
    pub val: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    names: RawNames,
    #[serde(default)]
    test: Option<String>,
    #[serde(default)]
    train: Option<String>,
    #[serde(default)]
    val: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNames {
    Sequence(Vec<String>),
    Mapping(BTreeMap<usize, String>),
}

impl Descriptor {
    /// Load and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self, Yolo2LabelmeError> {
        let data = fs::read_to_string(path).map_err(Yolo2LabelmeError::Io)?;
        let raw: RawDescriptor =
            serde_yaml::from_str(&data).map_err(|source| Yolo2LabelmeError::DescriptorParse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Descriptor {
            names: normalize_names(raw.names),
            test: raw.test,
            train: raw.train,
            val: raw.val,
        })
    }

    /// The relative directory configured for a split key, if any.
    pub fn split_dir(&self, key: &str) -> Option<&str> {
        match key {
            "test" => self.test.as_deref(),
            "train" => self.train.as_deref(),
            "val" => self.val.as_deref(),
            _ => None,
        }
    }
}

fn normalize_names(names: RawNames) -> Vec<String> {
    match names {
        RawNames::Sequence(names) => names,
        RawNames::Mapping(mapping) => {
            if mapping.is_empty() {
                Vec::new()
            } else {
                let max_index = *mapping.keys().max().expect("checked non-empty");
                let mut names = vec![String::new(); max_index + 1];
                for (index, name) in mapping {
                    names[index] = name;
                }
                for (index, name) in names.iter_mut().enumerate() {
                    if name.trim().is_empty() {
                        *name = format!("class_{}", index);
                    }
                }
                names
            }
        }
    }
}
