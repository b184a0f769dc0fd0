//! BM25 scoring kernel
//!
//! Formula:
//! BM25 = Σ(t∈q) IDF(t) * TF_BM25
//!
//! where TF_BM25 = (f_t,d * (k1 + 1)) / (f_t,d + k1 * ((1 - b) + (b * ℓ_d / ℓ_avg)))

/// BM25 tuning parameters, fixed for the lifetime of an index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    pub k1: f64,      // Term frequency saturation rate
    pub b: f64,       // Length normalization strength
    pub epsilon: f64, // IDF floor multiplier, applied to the average IDF
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            k1: 1.5,
            b: 0.75,
            epsilon: 0.25,
        }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64, epsilon: f64) -> Self {
        Bm25Params { k1, b, epsilon }
    }
}

/// Compute TF component for BM25
/// TF_BM25 = (f_t,d * (k1 + 1)) / (f_t,d + k1 * (1 - b + b * ℓ_d / ℓ_avg))
///
/// A zero denominator only happens together with a zero numerator
/// (`f_t,d = 0`, `b = 1`, `ℓ_d = 0`) and yields 0 instead of NaN.
///
/// # Arguments
/// * `f_td` - Term frequency in document (f_t,d)
/// * `doc_len` - Document length (ℓ_d)
/// * `avg_doc_len` - Average document length (ℓ_avg)
/// * `params` - BM25 parameters (k1, b)
pub fn compute_tf_bm25(f_td: u32, doc_len: usize, avg_doc_len: f64, params: &Bm25Params) -> f64 {
    let f_td = f64::from(f_td);
    let doc_len = doc_len as f64;
    let k1 = params.k1;
    let b = params.b;

    let numerator = f_td * (k1 + 1.0);
    let denominator = f_td + k1 * (1.0 - b + b * doc_len / avg_doc_len);

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Compute BM25 contribution of a single query term to a document
pub fn compute_term_score(
    idf: f64,         // IDF weight of the term
    f_td: u32,        // Term frequency in document
    doc_len: usize,   // Document length
    avg_doc_len: f64, // Average document length
    params: &Bm25Params,
) -> f64 {
    idf * compute_tf_bm25(f_td, doc_len, avg_doc_len, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = Bm25Params::default();
        assert_eq!(params, Bm25Params::new(1.5, 0.75, 0.25));
    }

    #[test]
    fn test_absent_term_has_zero_tf() {
        let params = Bm25Params::default();
        assert_eq!(compute_tf_bm25(0, 5, 3.0, &params), 0.0);
    }

    #[test]
    fn test_tf_at_average_length() {
        // with ℓ_d = ℓ_avg the length factor is 1: f*(k1+1)/(f+k1)
        let params = Bm25Params::default();
        let tf = compute_tf_bm25(2, 4, 4.0, &params);
        assert!((tf - 2.0 * 2.5 / 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_tf_saturates_below_k1_plus_one() {
        let params = Bm25Params::default();
        let tf = compute_tf_bm25(10_000, 4, 4.0, &params);
        assert!(tf < params.k1 + 1.0);
        assert!(tf > params.k1 + 1.0 - 0.01);
    }

    #[test]
    fn test_tf_is_monotonic_in_frequency() {
        let params = Bm25Params::default();
        let mut previous = 0.0;
        for f in 0..50 {
            let tf = compute_tf_bm25(f, 7, 5.5, &params);
            assert!(tf >= previous);
            previous = tf;
        }
    }

    #[test]
    fn test_longer_documents_score_lower() {
        let params = Bm25Params::default();
        assert!(compute_tf_bm25(1, 2, 4.0, &params) > compute_tf_bm25(1, 8, 4.0, &params));
    }

    #[test]
    fn test_zero_over_zero_is_guarded() {
        let params = Bm25Params::new(1.5, 1.0, 0.25);
        let tf = compute_tf_bm25(0, 0, 2.0, &params);
        assert_eq!(tf, 0.0);
        assert_eq!(compute_term_score(1.3, 0, 0, 2.0, &params), 0.0);
    }

    #[test]
    fn test_term_score_scales_with_idf() {
        let params = Bm25Params::default();
        let tf = compute_tf_bm25(3, 5, 4.0, &params);
        assert_eq!(compute_term_score(2.0, 3, 5, 4.0, &params), 2.0 * tf);
    }
}
