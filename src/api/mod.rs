pub mod employee;
pub mod salary;

#[cfg(test)]
pub(crate) mod test_support;
