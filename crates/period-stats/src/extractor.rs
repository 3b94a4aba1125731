//! Period extraction from a stream of edge events

use crate::moments::RunningMoments;
use crate::summary::PeriodSummary;
use crate::types::{ExtractorParameters, ExtractorState, OrderingPolicy};
use period_core::{
    EdgeEvent, EdgeMeasurer, EdgeMeasurerProperties, EdgePolarity, Error, Result, SampleTime,
    Timestamp,
};
use tracing::{debug, instrument, warn};

/// Streaming period statistics for one measurement session
///
/// Edges whose resulting level doesn't match the configured polarity are
/// skipped. Each qualifying edge after the first closes a period (the time
/// since the previous qualifying edge), which updates the running extrema,
/// sum and moments. Memory use is constant regardless of stream length.
///
/// An extractor is created per session, fed with [`ingest`](Self::ingest)
/// any number of times, then summarized with [`finalize`](Self::finalize).
///
/// # Example
///
/// ```
/// use period_core::{EdgeEvent, EdgePolarity, SampleTime};
/// use period_stats::PeriodExtractor;
///
/// let mut extractor = PeriodExtractor::new(EdgePolarity::Rising);
/// extractor
///     .ingest([
///         EdgeEvent::rising(SampleTime::from_seconds(0.0)),
///         EdgeEvent::falling(SampleTime::from_seconds(2.0)),
///         EdgeEvent::rising(SampleTime::from_seconds(5.0)),
///     ])
///     .unwrap();
///
/// let summary = extractor.finalize();
/// assert_eq!(summary.count, Some(1));
/// assert_eq!(summary.mean, Some(5.0));
/// assert_eq!(summary.frequency, Some(0.2));
/// ```
#[derive(Debug, Clone)]
pub struct PeriodExtractor<T: Timestamp = SampleTime> {
    params: ExtractorParameters,

    last_edge_time: Option<T>,
    last_event_time: Option<T>,
    events_seen: u64,
    qualifying_edges: u64,

    period_count: u64,
    period_sum: f64,
    period_min: Option<f64>,
    period_max: Option<f64>,
    moments: RunningMoments,
}

impl<T: Timestamp> PeriodExtractor<T> {
    /// Create an extractor reporting every measurement, trusting input order
    pub fn new(polarity: EdgePolarity) -> Self {
        Self::from_valid_parameters(ExtractorParameters::new(polarity))
    }

    /// Create an extractor with explicit parameters
    pub fn with_parameters(params: ExtractorParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_valid_parameters(params))
    }

    fn from_valid_parameters(params: ExtractorParameters) -> Self {
        Self {
            params,
            last_edge_time: None,
            last_event_time: None,
            events_seen: 0,
            qualifying_edges: 0,
            period_count: 0,
            period_sum: 0.0,
            period_min: None,
            period_max: None,
            moments: RunningMoments::new(),
        }
    }

    pub fn parameters(&self) -> &ExtractorParameters {
        &self.params
    }

    pub fn polarity(&self) -> EdgePolarity {
        self.params.polarity
    }

    /// Events accepted so far, qualifying or not
    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }

    pub fn qualifying_edges(&self) -> u64 {
        self.qualifying_edges
    }

    /// Completed periods so far
    pub fn periods(&self) -> u64 {
        self.period_count
    }

    pub fn state(&self) -> ExtractorState {
        match (self.last_edge_time.is_some(), self.period_count) {
            (false, _) => ExtractorState::Empty,
            (true, 0) => ExtractorState::Seeded,
            (true, _) => ExtractorState::Accumulating,
        }
    }

    /// Process a batch of events in time order
    ///
    /// Under [`OrderingPolicy::Validate`] the first event that goes backwards
    /// in time, or yields a non-finite interval, is rejected: events before it
    /// in the batch stay applied, it and the rest of the batch are dropped, and
    /// the extractor remains usable. Under [`OrderingPolicy::Trust`] this never
    /// fails.
    pub fn ingest<I, E>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeEvent<T>>,
    {
        let events_before = self.events_seen;
        let edges_before = self.qualifying_edges;

        for event in events {
            self.accept(event.into())?;
        }

        debug!(
            events = self.events_seen - events_before,
            qualifying = self.qualifying_edges - edges_before,
            periods = self.period_count,
            "Ingested batch"
        );
        Ok(())
    }

    fn accept(&mut self, event: EdgeEvent<T>) -> Result<()> {
        let index = self.events_seen;

        if let Some(previous) = self.last_event_time {
            let step = event.time.seconds_since(previous);
            if !step.is_finite() {
                self.flag(Error::non_finite(index))?;
            } else if step < 0.0 {
                self.flag(Error::out_of_order(index, step))?;
            }
        }

        let qualifying = self.params.polarity.qualifies(event.level);
        let period = match (qualifying, self.last_edge_time) {
            (true, Some(last)) => Some(event.time.seconds_since(last)),
            _ => None,
        };
        if let Some(delta) = period {
            if !delta.is_finite() {
                self.flag(Error::non_finite(index))?;
            }
        }

        self.events_seen += 1;
        self.last_event_time = Some(event.time);
        if !qualifying {
            return Ok(());
        }

        self.qualifying_edges += 1;
        self.last_edge_time = Some(event.time);
        match period {
            Some(delta) => self.record_period(delta),
            None => debug!(event = index, polarity = %self.params.polarity, "Seeded on first qualifying edge"),
        }
        Ok(())
    }

    /// Reject or report an input anomaly according to the ordering policy
    fn flag(&self, error: Error) -> Result<()> {
        match self.params.ordering {
            OrderingPolicy::Validate => Err(error),
            OrderingPolicy::Trust => {
                warn!(%error, "Accepting malformed input");
                Ok(())
            }
        }
    }

    fn record_period(&mut self, delta: f64) {
        self.period_count += 1;
        self.period_sum += delta;

        if self.period_min.map_or(true, |min| delta < min) {
            self.period_min = Some(delta);
        }
        if self.period_max.map_or(true, |max| delta > max) {
            self.period_max = Some(delta);
        }

        self.moments.add(delta);

        if self.period_count == 1 {
            debug!(period = delta, "First period recorded");
        }
    }

    /// Summarize the session
    ///
    /// Read-only: calling it again without further ingestion returns the same
    /// summary. Empty unless at least one period was recorded.
    #[instrument(skip_all, fields(polarity = %self.params.polarity, periods = self.period_count))]
    pub fn finalize(&self) -> PeriodSummary {
        let (Some(min), Some(max)) = (self.period_min, self.period_max) else {
            debug!(qualifying = self.qualifying_edges, "Not enough qualifying edges for a period");
            return PeriodSummary::empty();
        };

        let count = self.period_count;
        let mean = self.period_sum / count as f64;
        let frequency = if mean > 0.0 {
            Some(count as f64 / self.period_sum)
        } else {
            debug!(mean, "Omitting frequency for non-positive mean period");
            None
        };

        debug!(
            samples = self.moments.count(),
            running_mean = self.moments.mean(),
            mean,
            "Finalized periods"
        );

        PeriodSummary {
            min: Some(min),
            max: Some(max),
            mean: Some(mean),
            std_dev: Some(self.moments.standard_deviation()),
            count: Some(count),
            frequency,
        }
        .restricted_to(&self.params.requested)
    }
}

impl<T: Timestamp> EdgeMeasurerProperties for PeriodExtractor<T> {
    fn minimum_edges(&self) -> usize {
        2
    }

    fn method_name(&self) -> &str {
        "edge-period"
    }
}

impl<T: Timestamp> EdgeMeasurer<T> for PeriodExtractor<T> {
    type Summary = PeriodSummary;

    fn ingest<I, E>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeEvent<T>>,
    {
        PeriodExtractor::ingest(self, events)
    }

    fn finalize(&self) -> PeriodSummary {
        PeriodExtractor::finalize(self)
    }
}
