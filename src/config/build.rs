use crate::config::{
    FileParameters, RunConfig, StreamChoice, TokensParameters, UniformParameters,
    ValuesParameters,
};
use crate::streams::{TextFileStream, TokenStream, UniformGenerator, ValueStream, VecStream};
use crate::tasks::{StepReporter, StreamingAverageTask};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ValuesParameters> for VecStream {
    fn from(p: ValuesParameters) -> Self {
        VecStream::new(p.values)
    }
}

impl From<TokensParameters> for TokenStream {
    fn from(p: TokensParameters) -> Self {
        TokenStream::new(p.tokens)
    }
}

impl TryFrom<FileParameters> for TextFileStream {
    type Error = BuildError;

    fn try_from(p: FileParameters) -> Result<Self, Self::Error> {
        TextFileStream::new(p.path).map_err(BuildError::from)
    }
}

impl TryFrom<UniformParameters> for UniformGenerator {
    type Error = BuildError;

    fn try_from(p: UniformParameters) -> Result<Self, Self::Error> {
        let max_values = p
            .max_values
            .map(|v| {
                usize::try_from(v).map_err(|_| {
                    BuildError::InvalidParameter("max_values too large for usize".into())
                })
            })
            .transpose()?;

        UniformGenerator::new(p.low, p.high, max_values, p.seed).map_err(BuildError::from)
    }
}

pub fn build_stream(choice: StreamChoice) -> Result<Box<dyn ValueStream>, BuildError> {
    match choice {
        StreamChoice::Values(p) => Ok(Box::new(VecStream::from(p))),
        StreamChoice::Tokens(p) => Ok(Box::new(TokenStream::from(p))),
        StreamChoice::File(p) => {
            let s = TextFileStream::try_from(p)?;
            Ok(Box::new(s))
        }
        StreamChoice::Uniform(p) => {
            let s = UniformGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}

/// Turns a config into a ready-to-run task. Export settings are left to the
/// caller, which owns the finished curve.
pub fn build_task(
    config: &RunConfig,
    reporter: Box<dyn StepReporter>,
) -> Result<StreamingAverageTask, BuildError> {
    if config.sample_frequency == 0 {
        return Err(BuildError::InvalidParameter(
            "sample_frequency must be >= 1".into(),
        ));
    }
    let stream = build_stream(config.stream.clone())?;
    let task = StreamingAverageTask::new(stream, reporter, config.sample_frequency)?
        .with_max_values(config.max_values)
        .with_delay(Duration::from_millis(config.delay_ms))
        .with_invalid_policy(config.on_invalid);
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;
    use crate::tasks::{InvalidPolicy, SilentReporter};
    use crate::testing::RecordingReporter;
    use std::io::ErrorKind;

    fn uniform() -> UniformParameters {
        UniformParameters {
            low: 0.0,
            high: 10.0,
            max_values: Some(10),
            seed: 42,
        }
    }

    #[test]
    fn values_choice_builds_a_vec_stream() {
        let mut s = build_stream(StreamChoice::Values(ValuesParameters {
            values: vec![Observation::Int(3)],
        }))
        .unwrap();
        assert_eq!(s.next_value(), Some(Ok(Observation::Int(3))));
        assert!(s.next_value().is_none());
    }

    #[test]
    fn uniform_ok_and_bounded() {
        let mut s = build_stream(StreamChoice::Uniform(uniform())).unwrap();
        let mut n = 0;
        while let Some(v) = s.next_value() {
            assert!(v.is_ok());
            n += 1;
        }
        assert_eq!(n, 10);
    }

    #[test]
    fn uniform_with_inverted_bounds_is_rejected() {
        let mut p = uniform();
        p.low = 5.0;
        p.high = 1.0;
        let err = UniformGenerator::try_from(p).unwrap_err();
        match err {
            BuildError::Io(e) => assert_eq!(e.kind(), ErrorKind::InvalidInput),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn uniform_with_overflowing_width_is_rejected() {
        let cfg = RunConfig::from_json_str(
            r#"{"stream":{"type":"uniform","params":{"low":-1e308,"high":1e308}}}"#,
        )
        .unwrap();
        let err = build_stream(cfg.stream).err().unwrap();
        assert!(matches!(err, BuildError::Io(ref e) if e.kind() == ErrorKind::InvalidInput));
    }

    #[test]
    fn ok_when_max_values_is_none() {
        let mut p = uniform();
        p.max_values = None;
        assert!(UniformGenerator::try_from(p).is_ok());
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = build_stream(StreamChoice::File(FileParameters {
            path: "/no/such/values.txt".into(),
        }))
        .err()
        .unwrap();
        assert!(matches!(err, BuildError::Io(ref e) if e.kind() == ErrorKind::NotFound));
    }

    #[test]
    fn zero_sample_frequency_is_rejected() {
        let mut cfg = RunConfig::default();
        cfg.sample_frequency = 0;
        let err = build_task(&cfg, Box::new(SilentReporter)).err().unwrap();
        assert!(
            err.to_string().contains("sample_frequency must be >= 1"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn task_honours_config() {
        let mut cfg = RunConfig::new(StreamChoice::Tokens(TokensParameters {
            tokens: vec!["2".into(), "x".into(), "4".into(), "6".into()],
        }));
        cfg.on_invalid = InvalidPolicy::Skip;
        cfg.max_values = Some(2);

        let rec = RecordingReporter::default();
        let summary = build_task(&cfg, Box::new(rec.clone()))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(summary.values_seen, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(rec.means(), vec![2.0, 3.0]);
    }
}
