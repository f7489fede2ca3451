use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::reporter::Reporter;
use super::simulation::Simulation;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound on steps taken between two wall-clock checks.
const CLOCK_CHECK_STEPS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps_taken: u64,
    pub reports_written: u64,
    pub elapsed: Duration,
}

/// Drives a [`Simulation`] and invokes its reporters whenever they are due.
pub struct SimulationRunner<S: Simulation> {
    simulation: S,
    reporters: Vec<Box<dyn Reporter>>,
}

impl<S: Simulation> SimulationRunner<S> {
    pub fn new(simulation: S) -> Self {
        Self {
            simulation,
            reporters: Vec::new(),
        }
    }

    pub fn add_reporter(&mut self, reporter: Box<dyn Reporter>) {
        self.reporters.push(reporter);
    }

    pub fn simulation(&self) -> &S {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.simulation
    }

    /// Runs until `budget` of wall-clock time has elapsed.
    ///
    /// The budget is checked between stepping chunks, so the run may overshoot by the time
    /// of one chunk. The number of steps taken depends entirely on engine throughput.
    pub fn run_for_clock_time(
        &mut self,
        budget: Duration,
        progress: &ProgressReporter,
    ) -> Result<RunSummary, EngineError> {
        info!("Running simulation for {:?} of wall-clock time.", budget);
        self.advance(StopCondition::ClockTime(budget), progress)
    }

    /// Runs exactly `steps` integration steps, reporting along the way.
    pub fn run_steps(
        &mut self,
        steps: u64,
        progress: &ProgressReporter,
    ) -> Result<RunSummary, EngineError> {
        info!("Running simulation for {} steps.", steps);
        self.advance(StopCondition::Steps(steps), progress)
    }

    fn advance(
        &mut self,
        stop: StopCondition,
        progress: &ProgressReporter,
    ) -> Result<RunSummary, EngineError> {
        for reporter in &self.reporters {
            let interval = reporter.report_interval();
            if interval == 0 {
                return Err(EngineError::InvalidInterval { interval });
            }
        }

        let start = Instant::now();
        let start_step = self.simulation.current_step();
        let mut reports_written = 0;
        progress.report(Progress::RunStart { start_step });

        loop {
            let current = self.simulation.current_step();
            let mut chunk = self
                .reporters
                .iter()
                .map(|r| r.steps_until_next_report(current))
                .fold(CLOCK_CHECK_STEPS, u64::min);

            match stop {
                StopCondition::ClockTime(budget) => {
                    if start.elapsed() >= budget {
                        break;
                    }
                }
                StopCondition::Steps(total) => {
                    let remaining = total.saturating_sub(current - start_step);
                    if remaining == 0 {
                        break;
                    }
                    chunk = chunk.min(remaining);
                }
            }

            self.simulation.step(chunk)?;

            let now = self.simulation.current_step();
            let state = self.simulation.state();
            let timestep_ps = self.simulation.timestep_ps();
            for reporter in self.reporters.iter_mut() {
                if now % reporter.report_interval() == 0 {
                    reporter.report(&state, timestep_ps)?;
                    reports_written += 1;
                    progress.report(Progress::FrameWritten {
                        step: now,
                        frame: reports_written,
                    });
                }
            }
        }

        for reporter in self.reporters.iter_mut() {
            reporter.finalize()?;
        }

        let summary = RunSummary {
            steps_taken: self.simulation.current_step() - start_step,
            reports_written,
            elapsed: start.elapsed(),
        };
        progress.report(Progress::RunFinish {
            steps_taken: summary.steps_taken,
            elapsed: summary.elapsed,
        });
        debug!(
            "Run finished: {} steps, {} reports in {:?}.",
            summary.steps_taken, summary.reports_written, summary.elapsed
        );
        Ok(summary)
    }
}

#[derive(Debug, Clone, Copy)]
enum StopCondition {
    ClockTime(Duration),
    Steps(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulation::SimulationState;
    use crate::engine::simulation::testing::MockSimulation;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        interval: u64,
        steps: Arc<Mutex<Vec<u64>>>,
        finalized: Arc<Mutex<bool>>,
    }

    impl Recorder {
        fn new(interval: u64) -> (Self, Arc<Mutex<Vec<u64>>>, Arc<Mutex<bool>>) {
            let steps = Arc::new(Mutex::new(Vec::new()));
            let finalized = Arc::new(Mutex::new(false));
            (
                Self {
                    interval,
                    steps: steps.clone(),
                    finalized: finalized.clone(),
                },
                steps,
                finalized,
            )
        }
    }

    impl Reporter for Recorder {
        fn report_interval(&self) -> u64 {
            self.interval
        }

        fn report(&mut self, state: &SimulationState<'_>, _: f64) -> Result<(), EngineError> {
            self.steps.lock().unwrap().push(state.step);
            Ok(())
        }

        fn finalize(&mut self) -> Result<(), EngineError> {
            *self.finalized.lock().unwrap() = true;
            Ok(())
        }
    }

    #[test]
    fn run_steps_reports_on_interval_multiples() {
        let mut runner = SimulationRunner::new(MockSimulation::new(2));
        let (recorder, steps, finalized) = Recorder::new(25);
        runner.add_reporter(Box::new(recorder));

        let summary = runner.run_steps(110, &ProgressReporter::new()).unwrap();

        assert_eq!(summary.steps_taken, 110);
        assert_eq!(summary.reports_written, 4);
        assert_eq!(*steps.lock().unwrap(), vec![25, 50, 75, 100]);
        assert!(*finalized.lock().unwrap());
        assert_eq!(runner.simulation().current_step, 110);
    }

    #[test]
    fn multiple_reporters_are_scheduled_independently() {
        let mut runner = SimulationRunner::new(MockSimulation::new(1));
        let (every_3, steps_3, _) = Recorder::new(3);
        let (every_4, steps_4, _) = Recorder::new(4);
        runner.add_reporter(Box::new(every_3));
        runner.add_reporter(Box::new(every_4));

        runner.run_steps(12, &ProgressReporter::new()).unwrap();

        assert_eq!(*steps_3.lock().unwrap(), vec![3, 6, 9, 12]);
        assert_eq!(*steps_4.lock().unwrap(), vec![4, 8, 12]);
    }

    #[test]
    fn clock_bounded_run_stops_after_budget() {
        let mut simulation = MockSimulation::new(3);
        simulation.step_delay = Some(Duration::from_millis(1));
        let mut runner = SimulationRunner::new(simulation);
        let (recorder, steps, _) = Recorder::new(10);
        runner.add_reporter(Box::new(recorder));

        let budget = Duration::from_millis(150);
        let summary = runner
            .run_for_clock_time(budget, &ProgressReporter::new())
            .unwrap();

        assert!(summary.elapsed >= budget);
        assert!(summary.elapsed < budget + Duration::from_secs(2));
        assert!(summary.steps_taken > 0);
        assert_eq!(summary.steps_taken % 10, 0);
        assert_eq!(steps.lock().unwrap().len() as u64, summary.reports_written);
    }

    #[test]
    fn clock_bounded_run_without_reporters_checks_clock_every_few_steps() {
        let mut runner = SimulationRunner::new(MockSimulation::new(1));
        let summary = runner
            .run_for_clock_time(Duration::from_millis(20), &ProgressReporter::new())
            .unwrap();
        assert_eq!(summary.reports_written, 0);
        assert_eq!(summary.steps_taken % CLOCK_CHECK_STEPS, 0);
    }

    #[test]
    fn zero_interval_is_rejected_before_stepping() {
        let mut runner = SimulationRunner::new(MockSimulation::new(1));
        let (recorder, _, _) = Recorder::new(0);
        runner.add_reporter(Box::new(recorder));

        let result = runner.run_steps(10, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(EngineError::InvalidInterval { interval: 0 })
        ));
        assert_eq!(runner.simulation().current_step, 0);
    }

    #[test]
    fn engine_errors_propagate_unchanged() {
        let mut simulation = MockSimulation::new(1);
        simulation.fail_at_step = Some(30);
        let mut runner = SimulationRunner::new(simulation);

        let err = runner
            .run_steps(100, &ProgressReporter::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::Backend(_)));
        assert_eq!(err.to_string(), "engine exploded at step 30");
    }

    #[test]
    fn frame_events_are_forwarded_to_progress() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let progress = ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::FrameWritten { step, frame } = event {
                sink.lock().unwrap().push((step, frame));
            }
        }));

        let mut runner = SimulationRunner::new(MockSimulation::new(1));
        let (recorder, _, _) = Recorder::new(5);
        runner.add_reporter(Box::new(recorder));
        runner.run_steps(15, &progress).unwrap();

        assert_eq!(*events.lock().unwrap(), vec![(5, 1), (10, 2), (15, 3)]);
    }

    #[test]
    fn run_is_bracketed_by_start_and_finish_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let progress = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        let mut runner = SimulationRunner::new(MockSimulation::new(1));
        runner.simulation_mut().current_step = 40;
        runner.run_steps(20, &progress).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(events.first(), Some(&Progress::RunStart { start_step: 40 }));
        assert!(matches!(
            events.last(),
            Some(Progress::RunFinish { steps_taken: 20, .. })
        ));
    }
}
