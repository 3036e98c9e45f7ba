//! Tests for parameter validation and stable error codes.

use randgraph_core::{Binomial, BinomialBuilder, InvalidParameter, InvalidParameterCode};
use rstest::rstest;

#[rstest]
#[case(
    InvalidParameter::VertexCount { got: -1 },
    InvalidParameterCode::VertexCount,
    "RANDGRAPH_INVALID_VERTEX_COUNT",
)]
#[case(
    InvalidParameter::TrialCount { got: -4 },
    InvalidParameterCode::TrialCount,
    "RANDGRAPH_INVALID_TRIAL_COUNT",
)]
#[case(
    InvalidParameter::Probability { got: 1.5 },
    InvalidParameterCode::Probability,
    "RANDGRAPH_INVALID_PROBABILITY",
)]
fn returns_expected_code(
    #[case] error: InvalidParameter,
    #[case] expected: InvalidParameterCode,
    #[case] rendered: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), rendered);
    assert_eq!(expected.to_string(), rendered);
}

#[rstest]
#[case(-1, 0, 0.0, InvalidParameter::VertexCount { got: -1 })]
#[case(0, -1, 0.0, InvalidParameter::TrialCount { got: -1 })]
#[case(0, 0, -0.1, InvalidParameter::Probability { got: -0.1 })]
#[case(0, 0, 1.1, InvalidParameter::Probability { got: 1.1 })]
#[case(3, 2, f64::INFINITY, InvalidParameter::Probability { got: f64::INFINITY })]
fn construction_rejects_out_of_range_parameters(
    #[case] vertices: i64,
    #[case] trials: i64,
    #[case] probability: f64,
    #[case] expected: InvalidParameter,
) {
    let err = Binomial::new(vertices, trials, probability).expect_err("parameters are invalid");
    assert_eq!(err, expected);
}

#[test]
fn construction_rejects_nan_probability() {
    let err = Binomial::new(1, 1, f64::NAN).expect_err("NaN is not a probability");
    assert_eq!(err.code(), InvalidParameterCode::Probability);
}

#[rstest]
#[case(-1, -1, 2.0, InvalidParameterCode::TrialCount)]
#[case(-1, 0, 2.0, InvalidParameterCode::Probability)]
#[case(-1, 0, 0.5, InvalidParameterCode::VertexCount)]
fn trials_are_checked_before_probability_before_vertices(
    #[case] vertices: i64,
    #[case] trials: i64,
    #[case] probability: f64,
    #[case] expected: InvalidParameterCode,
) {
    let err = BinomialBuilder::new(vertices, trials, probability)
        .build()
        .expect_err("parameters are invalid");
    assert_eq!(err.code(), expected);
}

#[rstest]
#[case(InvalidParameter::VertexCount { got: -2 }, "invalid number of vertices: -2")]
#[case(InvalidParameter::TrialCount { got: -7 }, "invalid number of trials: -7")]
#[case(InvalidParameter::Probability { got: 2.5 }, "invalid success probability: 2.5")]
fn messages_name_the_rejected_value(#[case] error: InvalidParameter, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn boundary_values_are_accepted() {
    for (vertices, trials, probability) in [(0, 0, 0.0), (0, 0, 1.0), (1, 0, 0.5)] {
        assert!(
            Binomial::new(vertices, trials, probability).is_ok(),
            "({vertices}, {trials}, {probability}) must be accepted"
        );
    }
}
