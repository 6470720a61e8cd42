
use bs_heatmap::{norm_cdf, price, OptionParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{assert_close, reference_price};

/// Absolute accuracy of statrs 0.16 `Normal::cdf`, with headroom.
const STATRS_CDF_TOL: f64 = 5e-11;

/// Textbook at-the-money case: S=K=100, T=1, r=5%, vol=20%.
#[test]
fn test_textbook_reference_value() {
    let result = price(100.0, 100.0, 1.0, 0.05, 0.2, 0.0);

    assert_close(result.call, 10.450583572185565, 1e-6, "ATM call");
    assert_close(result.put, 5.573526022256971, 1e-6, "ATM put");
}

/// Φ at fixed points, against 20-digit values of `0.5 * erfc(-x / √2)`.
#[test]
fn test_norm_cdf_high_precision_values() {
    let cases = [
        (-8.0, 6.2209605742717841235e-16),
        (-5.0, 2.8665157187919391167e-7),
        (-2.0, 0.0227501319481792072),
        (-1.0, 0.15865525393145705141),
        (0.0, 0.5),
        (0.5, 0.69146246127401310364),
        (1.0, 0.84134474606854294859),
        (1.5, 0.933192798731141934),
        (3.0, 0.99865010196836990547),
    ];
    for &(x, expected) in &cases {
        assert_close(norm_cdf(x), expected, 1e-13 * expected, &format!("Φ({})", x));
    }
    assert_eq!(norm_cdf(0.0), 0.5);
}

/// Prices against 20-digit reference values, to the 1e-10 accuracy the kernel promises.
#[test]
fn test_matches_high_precision_prices() {
    // (S, K, T, r, vol, premium, call, put)
    let cases = [
        (100.0, 100.0, 1.0, 0.05, 0.2, 0.0, 10.450583572185566782, 5.5735260222569676908),
        (50.0, 55.0, 1.0, 0.02, 0.3, 2.5, 1.932077974169502367, 5.8430050060410439891),
        (10.0, 5.0, 10.0, 0.0, 0.7, 2.5, 5.6533825636538836163, 0.6533825636538836163),
        (1000.0, 900.0, 0.25, 0.02, 0.1, 2.5, 102.21524404456306476, -2.2735246820228532267),
        (50.0, 40.0, 0.5, 0.5, 1.0, 2.5, 20.404738257972144478, 1.556769580828339208),
        (100.0, 55.0, 0.01, 0.02, 0.4, 0.0, 45.010998900073329667, 1.5100400911824561639e-51),
    ];
    for &(spot, strike, t, r, vol, premium, call, put) in &cases {
        let res = price(spot, strike, t, r, vol, premium);
        let what = format!("S={} K={} T={} r={} vol={}", spot, strike, t, r, vol);
        assert_close(res.call, call, 1e-10, &what);
        assert_close(res.put, put, 1e-10, &what);
    }
}

/// Cross-check against statrs over the desktop slider ranges. statrs' normal CDF is
/// only good to roughly 1e-11, so the bound scales with the size of the two legs.
#[test]
fn test_agrees_with_statrs() {
    for &spot in &[10.0, 50.0, 100.0, 500.0, 1000.0] {
        for &strike in &[5.0, 40.0, 55.0, 100.0, 900.0] {
            for &t in &[0.01, 0.25, 1.0, 10.0] {
                for &r in &[0.0, 0.02, 0.5] {
                    for i in 1..=10 {
                        let vol = i as f64 * 0.1;
                        let ours = price(spot, strike, t, r, vol, 2.5);
                        let theirs = reference_price(spot, strike, t, r, vol, 2.5);
                        let tol = STATRS_CDF_TOL * (spot + strike);
                        let what = format!("S={} K={} T={} r={} vol={}", spot, strike, t, r, vol);
                        assert_close(ours.call, theirs.call, tol, &what);
                        assert_close(ours.put, theirs.put, tol, &what);
                    }
                }
            }
        }
    }
}

#[test]
fn test_norm_cdf_against_statrs() {
    let n = Normal::new(0.0, 1.0).unwrap();
    let mut x = -8.0;
    while x <= 8.0 {
        assert_close(norm_cdf(x), n.cdf(x), STATRS_CDF_TOL, &format!("Φ({})", x));
        x += 0.125;
    }
}

/// (call + premium) - (put + premium) = S - K·e^(-rT) on randomly drawn inputs.
#[test]
fn test_put_call_parity_random_inputs() {
    let mut rng = StdRng::seed_from_u64(20_240_517);

    for _ in 0..2_000 {
        let spot = rng.gen_range(1.0..1000.0);
        let strike = rng.gen_range(1.0..1000.0);
        let t = rng.gen_range(0.01..10.0);
        let r = rng.gen_range(0.0..0.25);
        let vol = rng.gen_range(0.01..2.0);
        let premium = rng.gen_range(0.0..5.0);

        let res = price(spot, strike, t, r, vol, premium);
        let lhs = (res.call + premium) - (res.put + premium);
        let rhs = spot - strike * (-r * t).exp();
        assert_close(
            lhs,
            rhs,
            1e-9,
            &format!("parity S={} K={} T={} r={} vol={}", spot, strike, t, r, vol),
        );
    }
}

/// The premium shifts both legs by exactly its value.
#[test]
fn test_premium_is_exact_offset() {
    for &premium in &[0.0, 0.01, 2.5, 5.0, -1.25] {
        let with = price(50.0, 55.0, 1.0, 0.02, 0.3, premium);
        let without = price(50.0, 55.0, 1.0, 0.02, 0.3, 0.0);
        assert_eq!(with.call, without.call - premium);
        assert_eq!(with.put, without.put - premium);
    }
}

/// Call value strictly increases with volatility (positive vega).
#[test]
fn test_call_increases_with_vol() {
    let cases = [
        (50.0, 55.0, 1.0, 0.02),
        (100.0, 100.0, 0.5, 0.05),
        (100.0, 90.0, 2.0, 0.01),
        (30.0, 45.0, 3.0, 0.10),
    ];
    for &(spot, strike, t, r) in &cases {
        let calls: Vec<f64> = (1..=20)
            .map(|i| price(spot, strike, t, r, i as f64 * 0.05, 0.0).call)
            .collect();
        assert!(
            calls.windows(2).all(|w| w[1] > w[0]),
            "call not increasing in vol for S={} K={}: {:?}",
            spot,
            strike,
            calls
        );
    }
}

/// Degenerate inputs are not rejected by the kernel; they come back non-finite.
#[test]
fn test_kernel_does_not_validate() {
    let zero_t = price(100.0, 100.0, 0.0, 0.05, 0.2, 0.0);
    assert!(zero_t.call.is_nan());

    let neg_k = price(100.0, -10.0, 1.0, 0.05, 0.2, 0.0);
    assert!(neg_k.call.is_nan() && neg_k.put.is_nan());

    let neg_s = price(-5.0, 100.0, 1.0, 0.05, 0.2, 0.0);
    assert!(neg_s.call.is_nan() && neg_s.put.is_nan());
}

/// The checked path rejects the same inputs and leaves valid results untouched.
#[test]
fn test_checked_pricing_layer() {
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
    assert_eq!(params.price_checked().unwrap(), params.price());

    let bad = OptionParameters {
        vol: 0.0,
        ..params
    };
    let err = bad.price_checked().unwrap_err();
    assert!(err.to_string().contains("volatility"), "{}", err);

    // Unchecked pricing still runs
    let _ = bad.price();
}
