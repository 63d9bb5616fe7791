use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::error::{ViewError, ViewResult};

/// Most charts plot one or two channels against the shared axis.
pub const MAX_CHANNELS: usize = 2;

/// One named value channel with its derived vertical-scale maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    values: Vec<f64>,
    max_value: f64,
}

impl Channel {
    fn from_values(name: &str, values: Vec<f64>) -> ViewResult<Self> {
        for value in &values {
            if !value.is_finite() || *value < 0.0 {
                return Err(ViewError::InvalidSeries(format!(
                    "channel '{name}' values must be finite and >= 0"
                )));
            }
        }

        let max_value = values
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map(|max| max.0)
            .unwrap_or(0.0);
        if max_value <= 0.0 {
            return Err(ViewError::InvalidSeries(format!(
                "channel '{name}' maximum must be > 0"
            )));
        }

        Ok(Self { values, max_value })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Denominator for linear 0-to-max vertical normalization.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}

/// Ordered, immutable sample set over a shared ordinal axis.
///
/// Each sample owns a label (its axis caption) and one value per channel.
/// Channel iteration preserves insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    labels: Vec<String>,
    channels: IndexMap<String, Channel>,
}

impl Series {
    pub fn builder<I, S>(labels: I) -> SeriesBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SeriesBuilder {
            labels: labels.into_iter().map(Into::into).collect(),
            channels: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.get(name)
    }

    pub fn channels(&self) -> impl Iterator<Item = (&str, &Channel)> {
        self.channels.iter().map(|(name, channel)| (name.as_str(), channel))
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Staged series input; validation happens once in [`SeriesBuilder::build`].
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    labels: Vec<String>,
    channels: Vec<(String, Vec<f64>)>,
}

impl SeriesBuilder {
    #[must_use]
    pub fn channel<S: Into<String>>(mut self, name: S, values: Vec<f64>) -> Self {
        self.channels.push((name.into(), values));
        self
    }

    pub fn build(self) -> ViewResult<Series> {
        if self.labels.len() < 2 {
            return Err(ViewError::InvalidSeries(
                "series requires at least 2 samples".to_owned(),
            ));
        }

        if self.channels.is_empty() || self.channels.len() > MAX_CHANNELS {
            return Err(ViewError::InvalidSeries(format!(
                "series requires between 1 and {MAX_CHANNELS} channels"
            )));
        }

        let mut channels = IndexMap::with_capacity(self.channels.len());
        for (name, values) in self.channels {
            if values.len() != self.labels.len() {
                return Err(ViewError::InvalidSeries(format!(
                    "channel '{name}' has {} values for {} samples",
                    values.len(),
                    self.labels.len()
                )));
            }

            let channel = Channel::from_values(&name, values)?;
            if channels.insert(name.clone(), channel).is_some() {
                return Err(ViewError::InvalidSeries(format!(
                    "duplicate channel '{name}'"
                )));
            }
        }

        Ok(Series {
            labels: self.labels,
            channels,
        })
    }
}
