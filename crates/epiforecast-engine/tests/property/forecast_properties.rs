use chrono::NaiveDate;
use epiforecast_core::config::ModelConfig;
use epiforecast_core::types::HistoricalSeries;
use epiforecast_engine::estimation::{EstimatedParameters, ParameterEstimator};
use epiforecast_engine::simulation::rng::stream_rng;
use epiforecast_engine::simulation::{Ensemble, PathSimulator};
use epiforecast_engine::summary::ResultSummarizer;
use proptest::prelude::*;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()
}

fn params_strategy() -> impl Strategy<Value = EstimatedParameters> {
    (-0.2f64..0.5, 0.0f64..0.3, -50.0f64..500.0, 0.0f64..300.0).prop_map(|(mg, sg, mn, sn)| {
        EstimatedParameters {
            mean_growth_rate: mg,
            std_growth_rate: sg,
            mean_new_cases: mn,
            std_new_cases: sn,
        }
    })
}

proptest! {
    #[test]
    fn estimator_std_finite_and_non_negative(
        mut totals in prop::collection::vec(0u64..1_000_000, 2..60),
        bump in 1u64..1000,
    ) {
        // guarantee at least one strictly increasing pair from a positive base
        totals[0] = totals[0].max(1);
        totals[1] = totals[0] + bump;
        let series = HistoricalSeries::from_totals(start(), &totals).unwrap();
        let params = ParameterEstimator::new().estimate(&series).unwrap();
        prop_assert!(params.std_growth_rate.is_finite() && params.std_growth_rate >= 0.0);
        prop_assert!(params.std_new_cases.is_finite() && params.std_new_cases >= 0.0);
        prop_assert!(params.mean_growth_rate > 0.0);
    }

    #[test]
    fn paths_never_decrease(
        params in params_strategy(),
        initial in 0.0f64..1e6,
        days in 1usize..60,
        seed in any::<u64>(),
    ) {
        let sim = PathSimulator::new(&params, &ModelConfig::default()).unwrap();
        let path = sim.simulate(initial, days, &mut stream_rng(seed, 0)).unwrap();
        prop_assert_eq!(path.len(), days);
        let mut prev = initial;
        for day in &path.days {
            prop_assert!(day.new_cases >= 0.0);
            prop_assert!(day.total >= prev);
            prev = day.total;
        }
    }

    #[test]
    fn same_stream_same_path(params in params_strategy(), seed in any::<u64>(), stream in any::<u64>()) {
        let sim = PathSimulator::new(&params, &ModelConfig::default()).unwrap();
        let a = sim.simulate(1000.0, 20, &mut stream_rng(seed, stream)).unwrap();
        let b = sim.simulate(1000.0, 20, &mut stream_rng(seed, stream)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn band_brackets_median(rows in prop::collection::vec(prop::collection::vec(0.0f64..1e7, 5), 1..80)) {
        let new_cases = rows.iter().map(|r| vec![0.0; r.len()]).collect();
        let ensemble = Ensemble::from_rows(rows, new_cases).unwrap();
        let s = ResultSummarizer::default().summarize(&ensemble, 1000.0).unwrap();
        for day in 0..5 {
            prop_assert!(s.lower[day] <= s.median[day]);
            prop_assert!(s.median[day] <= s.upper[day]);
        }
        prop_assert!((0.0..=1.0).contains(&s.risk.probability));
        prop_assert!(s.risk.best_case <= s.risk.worst_case);
    }
}
