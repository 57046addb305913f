use crate::TestSetup;

pub mod data;
pub mod mockito;

impl TestSetup {
    pub fn compute<'a>(&'a mut self) -> ComputeFixtures<'a> {
        ComputeFixtures { setup: self }
    }
}

pub struct ComputeFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
