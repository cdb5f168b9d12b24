use std::thread;
use std::time::Duration;
use boostwatch::prelude::*;


/// A base learner that never contributes.
struct Zero;

impl BaseLearner for Zero {
    fn data_identifier(&self) -> &str { "x" }
    fn predict(&self, data: &Feature) -> Vec<f64> { vec![0.0; data.len()] }
}


/// Tests for `TimeLogger`.
/// The elapsed time is not reproducible,
/// so only the ordering and the trivial budget are checked.
#[cfg(test)]
pub mod time_logger_tests {
    use super::*;

    #[test]
    fn elapsed_time_is_non_decreasing() {
        let mut logger = TimeLogger::new(TimeUnit::Microseconds);
        (1..=5).for_each(|iter| {
            logger.log_step(iter, &[], &[], &Zero, 0.0, 0.1).unwrap();
            thread::sleep(Duration::from_millis(1));
        });

        let elapsed = logger.logged_data();
        assert_eq!(elapsed.len(), 5);
        assert!(elapsed.windows(2).all(|w| w[0] <= w[1]));
        assert!(elapsed[4] >= 4_000.0);
    }


    #[test]
    fn seconds_are_non_decreasing() {
        let mut logger = TimeLogger::with_unit_name("seconds").unwrap();
        (1..=3).for_each(|iter| {
            logger.log_step(iter, &[], &[], &Zero, 0.0, 0.1).unwrap();
        });

        let elapsed = logger.logged_data();
        assert!(elapsed.windows(2).all(|w| w[0] <= w[1]));
    }


    #[test]
    fn zero_budget_stops_immediately() {
        let mut logger = TimeLogger::new(TimeUnit::Seconds)
            .max_time(0)
            .stopper(true);
        logger.log_step(1, &[], &[], &Zero, 0.0, 0.1).unwrap();
        assert!(logger.reached_stop_criteria().unwrap());
    }


    #[test]
    fn non_stopper_never_stops() {
        let mut logger = TimeLogger::new(TimeUnit::Seconds).max_time(0);
        logger.log_step(1, &[], &[], &Zero, 0.0, 0.1).unwrap();
        assert!(!logger.reached_stop_criteria().unwrap());
    }


    #[test]
    fn unknown_unit_is_a_configuration_error() {
        let err = TimeLogger::with_unit_name("hours").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidTimeUnit(_)));
    }


    #[test]
    fn clear_restarts_the_clock() {
        let mut logger = TimeLogger::new(TimeUnit::Microseconds);
        logger.log_step(1, &[], &[], &Zero, 0.0, 0.1).unwrap();
        thread::sleep(Duration::from_millis(20));
        logger.log_step(2, &[], &[], &Zero, 0.0, 0.1).unwrap();
        assert!(logger.logged_data()[1] >= 20_000.0);

        logger.clear_logger_data();
        assert!(logger.logged_data().is_empty());

        logger.log_step(1, &[], &[], &Zero, 0.0, 0.1).unwrap();
        assert!(logger.logged_data()[0] < 20_000.0);
        assert_eq!(logger.status().unwrap().len(), logger.status_width());
    }
}
