//! JSON configuration of the command-line tools.
use crate::align::AnalyzeOptions;
use crate::batch::GenerateOptions;
use crate::error::{Error, Result};
use crate::filters::FilterKind;
use crate::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// `gen_df` / `gen_sdf` settings; inputs come from the command line.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateToolConfig {
    #[serde(flatten)]
    pub options: GenerateOptions,
    /// Optional JSON report of written and skipped files.
    pub report: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FilterToolConfig {
    pub inputs: Vec<PathBuf>,
    pub filter: FilterKind,
    #[serde(default)]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AlignToolConfig {
    /// Keyframe the morph starts from.
    pub start: PathBuf,
    /// Keyframe the morph ends at.
    pub end: PathBuf,
    #[serde(default)]
    pub analysis: AnalyzeOptions,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Command line of `gen_df` / `gen_sdf`: `[--config cfg.json] <image>...`.
#[derive(Clone, Debug, Default)]
pub struct GenerateArgs {
    pub config: GenerateToolConfig,
    pub inputs: Vec<PathBuf>,
}

pub fn parse_generate_args<I>(args: I) -> Result<GenerateArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = GenerateArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| Error::invalid("--config needs a path"))?;
            parsed.config = load_generate_config(Path::new(&path))?;
        } else if arg.starts_with("--") || arg == "-h" {
            return Err(Error::invalid(format!("unknown option {arg}")));
        } else {
            parsed.inputs.push(PathBuf::from(arg));
        }
    }
    if parsed.inputs.is_empty() {
        return Err(Error::invalid("no input images given"));
    }
    Ok(parsed)
}

pub fn load_generate_config(path: &Path) -> Result<GenerateToolConfig> {
    read_json_file(path)
}

pub fn load_filter_config(path: &Path) -> Result<FilterToolConfig> {
    read_json_file(path)
}

pub fn load_align_config(path: &Path) -> Result<AlignToolConfig> {
    read_json_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::SdfLayout;
    use crate::field::Channel;
    use crate::jfa::JumpSchedule;

    #[test]
    fn generate_config_flattens_options() {
        let cfg: GenerateToolConfig = serde_json::from_str(
            r#"{
                "seed_rule": {"channel": "a", "threshold": 0.1},
                "jfa": {"schedule": "halving"},
                "sdf_layout": "signed",
                "report": "out/report.json"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.options.seed_rule.channel, Channel::A);
        assert!(!cfg.options.seed_rule.invert);
        assert_eq!(cfg.options.jfa.schedule, JumpSchedule::Halving);
        assert_eq!(cfg.options.sdf_layout, SdfLayout::Signed);
        assert_eq!(cfg.report, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn generate_args_collect_inputs() {
        let args = ["a.png", "b.png"].map(String::from);
        let parsed = parse_generate_args(args).unwrap();
        assert_eq!(parsed.inputs, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert!(parse_generate_args(Vec::<String>::new()).is_err());
        assert!(parse_generate_args(["--config".to_string()]).is_err());
    }

    #[test]
    fn unknown_flags_are_not_taken_as_inputs() {
        for flag in ["--help", "--confg", "-h"] {
            let err = parse_generate_args([flag.to_string(), "a.png".to_string()]).unwrap_err();
            assert!(err.to_string().contains(flag), "{err}");
        }
    }

    #[test]
    fn align_config_defaults_analysis() {
        let cfg: AlignToolConfig =
            serde_json::from_str(r#"{"start": "a.png", "end": "b.png"}"#).unwrap();
        assert_eq!(cfg.analysis, AnalyzeOptions::default());
        assert!(cfg.output.is_none());
    }

    #[test]
    fn filter_config_reads_tagged_filter() {
        let cfg: FilterToolConfig = serde_json::from_str(
            r#"{"inputs": ["x.png"], "filter": {"kind": "binarize", "threshold": 0.4}}"#,
        )
        .unwrap();
        assert_eq!(cfg.filter, FilterKind::Binarize { threshold: 0.4 });
    }
}
