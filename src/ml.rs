//! Statistical models for symptom classification.
//!
//! The crate currently ships one estimator, a multinomial Naive Bayes model
//! over word and character n-gram features. See [`naive_bayes`].

pub mod naive_bayes;
