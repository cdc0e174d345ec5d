use super::*;
use crate::classifier::{ClassifierError, LinearModel};
use crate::features::FEATURE_COUNT;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed marker and counts invocations.
struct FixedClassifier {
    marker: ClassMarker,
    calls: AtomicUsize,
}

impl FixedClassifier {
    fn new(marker: ClassMarker) -> Arc<Self> {
        Arc::new(Self {
            marker,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for FixedClassifier {
    fn predict(&self, features: &[f64]) -> Result<ClassMarker, ClassifierError> {
        assert_eq!(features.len(), FEATURE_COUNT);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.marker)
    }
}

struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _: &[f64]) -> Result<ClassMarker, ClassifierError> {
        Err(ClassifierError::Other("model exploded at /secret/path".into()))
    }
}

struct PanickingClassifier;

impl Classifier for PanickingClassifier {
    fn predict(&self, _: &[f64]) -> Result<ClassMarker, ClassifierError> {
        panic!("boom")
    }
}

const URLS: &[&str] = &[
    "http://192.168.0.1/login.php",
    "https://www.example.com/secure/account/confirm",
    "x",
    "not a url at all",
    "\u{1F600}\u{0}",
];

#[test]
fn positive_marker_is_always_phishing() {
    let stub = FixedClassifier::new(POSITIVE_MARKER);
    let svc = ClassificationService::new(stub.clone());
    for url in URLS {
        assert_eq!(svc.classify(Some(*url)), Ok(Label::Phishing));
    }
    assert_eq!(stub.calls(), URLS.len());
}

#[test]
fn negative_marker_is_always_legitimate() {
    let svc = ClassificationService::new(FixedClassifier::new(NEGATIVE_MARKER));
    for url in URLS {
        assert_eq!(svc.classify(Some(*url)), Ok(Label::Legitimate));
    }
}

#[test]
fn missing_or_empty_url_never_reaches_classifier() {
    let stub = FixedClassifier::new(POSITIVE_MARKER);
    let svc = ClassificationService::new(stub.clone());
    assert_eq!(svc.classify(None), Err(ClassifyError::InvalidInput));
    assert_eq!(svc.classify(Some("")), Err(ClassifyError::InvalidInput));
    assert_eq!(stub.calls(), 0);
}

#[test]
fn classifier_error_becomes_generic_failure() {
    let svc = ClassificationService::new(Arc::new(FailingClassifier));
    let err = svc.classify(Some("http://example.com")).unwrap_err();
    assert_eq!(err, ClassifyError::ClassificationFailure);
    assert!(!err.is_client_error());
    assert!(!err.to_string().contains("secret"));
}

#[test]
fn classifier_panic_is_contained() {
    let svc = ClassificationService::new(Arc::new(PanickingClassifier));
    assert_eq!(
        svc.classify(Some("http://example.com")),
        Err(ClassifyError::ClassificationFailure)
    );
}

#[test]
fn unrecognized_marker_is_failure() {
    let svc = ClassificationService::new(FixedClassifier::new(7));
    assert_eq!(
        svc.classify(Some("http://example.com")),
        Err(ClassifyError::ClassificationFailure)
    );
}

#[test]
fn dimension_mismatch_is_failure() {
    let svc = ClassificationService::new(Arc::new(LinearModel::new(0.0, vec![1.0; 3])));
    assert_eq!(
        svc.classify(Some("http://example.com")),
        Err(ClassifyError::ClassificationFailure)
    );
}

#[test]
fn linear_model_end_to_end() {
    // Only the "login" indicator carries weight.
    let mut weights = vec![0.0; FEATURE_COUNT];
    weights[crate::features::Feature::ContainsLogin.index()] = 10.0;
    let svc = ClassificationService::new(Arc::new(LinearModel::new(-5.0, weights)));
    assert_eq!(
        svc.classify(Some("http://example.com/LOGIN")),
        Ok(Label::Phishing)
    );
    assert_eq!(
        svc.classify(Some("http://example.com/home")),
        Ok(Label::Legitimate)
    );
}

#[test]
fn concurrent_requests_share_one_model() {
    let stub = FixedClassifier::new(POSITIVE_MARKER);
    let svc = ClassificationService::new(stub.clone());
    std::thread::scope(|s| {
        for i in 0..8 {
            let svc = svc.clone();
            s.spawn(move || {
                let url = format!("http://host{i}.example.com/");
                assert_eq!(svc.classify(Some(&url)), Ok(Label::Phishing));
            });
        }
    });
    assert_eq!(stub.calls(), 8);
}

#[test]
fn failure_does_not_poison_sibling_requests() {
    let failing = ClassificationService::new(Arc::new(PanickingClassifier));
    let healthy = ClassificationService::new(FixedClassifier::new(NEGATIVE_MARKER));
    assert!(failing.classify(Some("http://a")).is_err());
    assert_eq!(healthy.classify(Some("http://a")), Ok(Label::Legitimate));
    assert!(failing.classify(Some("http://b")).is_err());
}

#[test]
fn labels_and_errors_classify_correctly() {
    assert_eq!(Label::from_marker(1), Some(Label::Phishing));
    assert_eq!(Label::from_marker(0), Some(Label::Legitimate));
    assert_eq!(Label::from_marker(-1), None);
    assert_eq!(Label::Phishing.to_string(), "phishing");
    assert!(ClassifyError::InvalidInput.is_client_error());
}
