pub mod pass_issuance;

#[cfg(test)]
pub(crate) mod test_utilities;
