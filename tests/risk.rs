use std::collections::HashMap;
use boostwatch::prelude::*;


/// Uses the prediction itself as the loss value,
/// so that a test controls the logged risk directly.
struct PredictionAsLoss;

impl Loss for PredictionAsLoss {
    fn name(&self) -> &str { "Prediction" }

    fn defined_loss(&self, _response: &[f64], prediction: &[f64])
        -> Vec<f64>
    {
        prediction.to_vec()
    }
}


/// Predicts the same value for every row of its feature.
struct Constant {
    feature: String,
    value: f64,
}

impl Constant {
    fn new(feature: &str, value: f64) -> Self {
        Self { feature: feature.to_string(), value }
    }
}

impl BaseLearner for Constant {
    fn data_identifier(&self) -> &str { &self.feature }
    fn predict(&self, data: &Feature) -> Vec<f64> {
        vec![self.value; data.len()]
    }
}


/// Predicts one row more than its feature has.
struct OneRowTooMany;

impl BaseLearner for OneRowTooMany {
    fn data_identifier(&self) -> &str { "x" }
    fn predict(&self, data: &Feature) -> Vec<f64> {
        vec![0.0; data.len() + 1]
    }
}


fn held_out() -> HashMap<String, Feature> {
    HashMap::from([
        ("x".to_string(), Feature::dense("x", vec![1.0, 2.0, 3.0])),
    ])
}


/// Tests for `InbagRiskLogger`.
#[cfg(test)]
pub mod inbag_risk_tests {
    use super::*;

    fn log_risks(logger: &mut InbagRiskLogger<'_>, risks: &[f64]) {
        let learner = Constant::new("x", 0.0);
        risks.iter()
            .enumerate()
            .for_each(|(i, &r)| {
                logger.log_step(i + 1, &[0.0], &[r], &learner, 0.0, 0.1)
                    .unwrap();
            });
    }


    #[test]
    fn slow_improvement_stops() {
        let loss = PredictionAsLoss;
        let mut logger = InbagRiskLogger::new(&loss)
            .eps_for_break(0.3)
            .stopper(true);

        log_risks(&mut logger, &[1.0]);
        assert!(!logger.reached_stop_criteria().unwrap());

        // (1.0 - 0.5) / 1.0 = 0.5 > 0.3
        log_risks(&mut logger, &[0.5]);
        assert!(!logger.reached_stop_criteria().unwrap());

        // (0.5 - 0.45) / 0.5 = 0.1 <= 0.3
        log_risks(&mut logger, &[0.45]);
        assert!(logger.reached_stop_criteria().unwrap());
        assert_eq!(logger.logged_data(), vec![1.0, 0.5, 0.45]);
    }


    #[test]
    fn fast_improvement_continues() {
        let loss = PredictionAsLoss;
        let mut logger = InbagRiskLogger::new(&loss)
            .eps_for_break(0.3)
            .stopper(true);

        // eps = 0.5, then 0.48
        log_risks(&mut logger, &[1.0, 0.5, 0.26]);
        assert!(!logger.reached_stop_criteria().unwrap());
    }


    #[test]
    fn risk_is_the_mean_loss() {
        let loss = LossKind::Quadratic;
        let mut logger = InbagRiskLogger::new(&loss);
        let learner = Constant::new("x", 0.0);

        logger.log_step(1, &[1.0, 2.0], &[0.0, 0.0], &learner, 0.0, 0.1)
            .unwrap();
        assert_eq!(logger.logged_data(), vec![2.5]);
        assert_eq!(logger.status().unwrap().trim(), "2.50000");
    }


    #[test]
    fn zero_previous_risk_fails() {
        let loss = PredictionAsLoss;
        let mut logger = InbagRiskLogger::new(&loss).stopper(true);

        log_risks(&mut logger, &[0.0, 0.0]);
        let err = logger.reached_stop_criteria().unwrap_err();
        assert!(matches!(err, LoggerError::ZeroRisk { .. }));
    }


    #[test]
    fn clear_resets_the_trajectory() {
        let loss = PredictionAsLoss;
        let mut logger = InbagRiskLogger::new(&loss).stopper(true);

        log_risks(&mut logger, &[1.0, 0.9, 0.8]);
        assert_eq!(logger.logged_data().len(), 3);

        logger.clear_logger_data();
        assert!(logger.logged_data().is_empty());
        assert!(logger.status().is_err());
    }
}


/// Tests for `OobRiskLogger`.
#[cfg(test)]
pub mod oob_risk_tests {
    use super::*;

    #[test]
    fn first_iteration_starts_at_offset() {
        let loss = LossKind::Quadratic;
        let data = held_out();
        let mut logger = OobRiskLogger::new(&loss, &data, vec![2.0; 3]);
        assert_eq!(logger.shadow_prediction(), &[0.0, 0.0, 0.0]);

        let learner = Constant::new("x", 5.0);
        logger.log_step(1, &[], &[], &learner, 2.0, 0.0).unwrap();

        assert_eq!(logger.shadow_prediction(), &[2.0, 2.0, 2.0]);
        assert_eq!(logger.logged_data(), vec![0.0]);
    }


    #[test]
    fn shadow_prediction_accumulates_scaled_contributions() {
        let loss = LossKind::Quadratic;
        let data = held_out();
        let mut logger = OobRiskLogger::new(&loss, &data, vec![0.0; 3]);

        let learner = Constant::new("x", 2.0);
        logger.log_step(1, &[], &[], &learner, 1.0, 0.5).unwrap();
        logger.log_step(2, &[], &[], &learner, 1.0, 0.5).unwrap();

        assert_eq!(logger.shadow_prediction(), &[3.0, 3.0, 3.0]);
        assert_eq!(logger.logged_data(), vec![4.0, 9.0]);
    }


    #[test]
    fn relative_improvement_stops() {
        let loss = PredictionAsLoss;
        let data = held_out();
        let mut logger = OobRiskLogger::new(&loss, &data, vec![0.0; 3])
            .eps_for_break(0.3)
            .stopper(true);

        // Shadow prediction: 1.0, 0.5, 0.45
        logger.log_step(1, &[], &[], &Constant::new("x", 0.0), 1.0, 1.0)
            .unwrap();
        assert!(!logger.reached_stop_criteria().unwrap());

        logger.log_step(2, &[], &[], &Constant::new("x", -0.5), 1.0, 1.0)
            .unwrap();
        assert!(!logger.reached_stop_criteria().unwrap());

        logger.log_step(3, &[], &[], &Constant::new("x", -0.05), 1.0, 1.0)
            .unwrap();
        assert!(logger.reached_stop_criteria().unwrap());
    }


    #[test]
    fn unknown_feature_fails() {
        let loss = LossKind::Quadratic;
        let data = held_out();
        let mut logger = OobRiskLogger::new(&loss, &data, vec![0.0; 3]);

        let learner = Constant::new("z", 1.0);
        let err = logger.log_step(1, &[], &[], &learner, 0.0, 0.1)
            .unwrap_err();
        assert!(matches!(err, LoggerError::UnknownFeature(f) if f == "z"));
        assert!(logger.logged_data().is_empty());
    }


    #[test]
    fn prediction_of_wrong_length_fails() {
        let loss = LossKind::Quadratic;
        let data = held_out();
        let mut logger = OobRiskLogger::new(&loss, &data, vec![0.0; 3]);

        let err = logger.log_step(1, &[], &[], &OneRowTooMany, 0.5, 0.1)
            .unwrap_err();
        assert!(matches!(
            err,
            LoggerError::LengthMismatch { expected: 3, found: 4 }
        ));
        assert!(logger.logged_data().is_empty());
    }


    #[test]
    fn clear_resets_shadow_prediction() {
        let loss = LossKind::Absolute;
        let data = held_out();
        let mut logger = OobRiskLogger::new(&loss, &data, vec![1.0; 3]);

        let learner = Constant::new("x", 1.0);
        (1..=3).for_each(|iter| {
            logger.log_step(iter, &[], &[], &learner, 0.0, 0.1).unwrap();
        });
        let first_run = logger.logged_data();

        logger.clear_logger_data();
        assert!(logger.logged_data().is_empty());
        assert_eq!(logger.shadow_prediction(), &[0.0, 0.0, 0.0]);

        (1..=3).for_each(|iter| {
            logger.log_step(iter, &[], &[], &learner, 0.0, 0.1).unwrap();
        });
        assert_eq!(logger.logged_data(), first_run);
    }


    #[test]
    fn from_sample_uses_held_out_response() {
        let loss = LossKind::Quadratic;
        let sample = HeldOutSample::new(
            vec![Feature::sparse("x", vec![(1, 1.0)], 2)],
            vec![1.0, 3.0],
        ).unwrap();
        let mut logger = OobRiskLogger::from_sample(&loss, &sample);

        let learner = Constant::new("x", 0.0);
        logger.log_step(1, &[], &[], &learner, 1.0, 0.1).unwrap();
        assert_eq!(logger.logged_data(), vec![2.0]);
    }
}
