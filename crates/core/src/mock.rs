use async_trait::async_trait;
use mockall::mock;

use crate::models::availability::WeeklyTimeWindow;
use crate::oracle::AvailabilityOracle;

// Mock oracle for handler and pipeline tests
mock! {
    pub Oracle {}

    #[async_trait]
    impl AvailabilityOracle for Oracle {
        async fn parse_availability(
            &self,
            availability_text: &str,
        ) -> eyre::Result<Vec<WeeklyTimeWindow>>;
    }
}
