pub mod iam;
pub mod vcr;
pub mod vpc;
