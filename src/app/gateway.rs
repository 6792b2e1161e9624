use std::sync::Arc;

use crate::app::ports::WriteExecutor;
use crate::domain::{
    Category, ErrorKind, ExecutionResult, InsertSpec, InvalidSpecError, NewsArticle, NewsImage,
    NewsSummary, Publisher, PublisherFields, Reporter, build_statement,
};

/// Turns a validated [`InsertSpec`] into one parameterized INSERT on the
/// borrowed executor and reports the outcome as data.
///
/// Stateless between calls and safe to share across tasks; any serialization
/// discipline for a single underlying session belongs to the executor.
#[derive(Clone)]
pub struct WriteGateway {
    executor: Arc<dyn WriteExecutor>,
}

impl WriteGateway {
    pub fn new(executor: Arc<dyn WriteExecutor>) -> Self {
        Self { executor }
    }

    /// Build, execute, commit-per-call.
    ///
    /// Validation failures surface as `Err` before any I/O. Execution faults
    /// are caught and returned as a failed [`ExecutionResult`] so batch
    /// callers can continue past individual failures.
    pub async fn execute(&self, spec: &InsertSpec) -> Result<ExecutionResult, InvalidSpecError> {
        let statement = build_statement(spec)?;
        match self.executor.execute_insert(&statement).await {
            Ok(outcome) => Ok(ExecutionResult::success(&outcome)),
            Err(e) => Ok(ExecutionResult::failure(ErrorKind::Execution, e.to_string())),
        }
    }

    pub async fn insert_category(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ExecutionResult, InvalidSpecError> {
        let spec = Category::new(name, description)?.into_spec();
        self.execute(&spec).await
    }

    pub async fn insert_reporter(
        &self,
        name: &str,
        email: &str,
    ) -> Result<ExecutionResult, InvalidSpecError> {
        let spec = Reporter::new(name, email)?.into_spec();
        self.execute(&spec).await
    }

    pub async fn insert_publisher(
        &self,
        fields: PublisherFields,
    ) -> Result<ExecutionResult, InvalidSpecError> {
        let spec = Publisher::new(fields)?.into_spec();
        self.execute(&spec).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_news(
        &self,
        category_id: i64,
        reporter_id: i64,
        publisher_id: i64,
        datetime: &str,
        title: &str,
        body: &str,
        link: &str,
    ) -> Result<ExecutionResult, InvalidSpecError> {
        let spec = NewsArticle::new(
            category_id,
            reporter_id,
            publisher_id,
            datetime,
            title,
            body,
            link,
        )?
        .into_spec();
        self.execute(&spec).await
    }

    pub async fn insert_image(
        &self,
        news_id: i64,
        image_url: &str,
    ) -> Result<ExecutionResult, InvalidSpecError> {
        let spec = NewsImage::new(news_id, image_url)?.into_spec();
        self.execute(&spec).await
    }

    pub async fn insert_summary(
        &self,
        news_id: i64,
        summary_text: &str,
    ) -> Result<ExecutionResult, InvalidSpecError> {
        let spec = NewsSummary::new(news_id, summary_text)?.into_spec();
        self.execute(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::ExecutionError;
    use crate::domain::{InsertStatement, SqlValue, WriteOutcome};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        Executor {}

        #[async_trait]
        impl WriteExecutor for Executor {
            async fn execute_insert(
                &self,
                statement: &InsertStatement,
            ) -> Result<WriteOutcome, ExecutionError>;
        }
    }

    fn outcome(id: i64) -> WriteOutcome {
        WriteOutcome {
            rows_affected: 1,
            generated_id: Some(id),
            execution_time_ms: 2,
        }
    }

    fn category_spec() -> InsertSpec {
        InsertSpec::new(
            "categories",
            vec!["name".to_string(), "description".to_string()],
            vec![SqlValue::from("International"), SqlValue::from("World news")],
        )
    }

    mod execute {
        use super::*;

        #[tokio::test]
        async fn valid_spec_returns_success_with_generated_id() {
            let mut executor = MockExecutor::new();
            executor
                .expect_execute_insert()
                .with(always())
                .times(1)
                .returning(|_| Ok(outcome(7)));

            let gateway = WriteGateway::new(Arc::new(executor));
            let result = gateway.execute(&category_spec()).await.unwrap();

            assert!(result.success);
            assert_eq!(result.generated_id, Some(7));
            assert_eq!(result.rows_affected, Some(1));
        }

        #[tokio::test]
        async fn executor_fault_becomes_failed_result_not_error() {
            let mut executor = MockExecutor::new();
            executor.expect_execute_insert().times(1).returning(|_| {
                Err(ExecutionError::StatementFailed(
                    "violates foreign key constraint".to_string(),
                ))
            });

            let gateway = WriteGateway::new(Arc::new(executor));
            let result = gateway.execute(&category_spec()).await.unwrap();

            assert!(!result.success);
            let error = result.error.unwrap();
            assert_eq!(error.kind, ErrorKind::Execution);
            assert!(error.message.contains("foreign key"));
        }

        #[tokio::test]
        async fn invalid_spec_fails_before_any_execution() {
            // No expectations set: any executor call would panic the mock.
            let executor = MockExecutor::new();
            let gateway = WriteGateway::new(Arc::new(executor));

            let spec = InsertSpec::new(
                "categories",
                vec!["name".to_string()],
                vec![],
            );
            let result = gateway.execute(&spec).await;

            assert!(matches!(
                result,
                Err(InvalidSpecError::ColumnValueCountMismatch { .. })
            ));
        }
    }

    mod convenience {
        use super::*;

        #[tokio::test]
        async fn insert_news_sends_statement_against_news_table() {
            let mut executor = MockExecutor::new();
            executor
                .expect_execute_insert()
                .withf(|stmt: &InsertStatement| {
                    stmt.sql.starts_with("INSERT INTO \"news\"") && stmt.values.len() == 7
                })
                .times(1)
                .returning(|_| Ok(outcome(1)));

            let gateway = WriteGateway::new(Arc::new(executor));
            let result = gateway
                .insert_news(
                    1,
                    1,
                    1,
                    "2024-05-03 00:00:00",
                    "News",
                    "Ronaldo wins World Cup",
                    "https://trustmebro.com/sheinews",
                )
                .await
                .unwrap();

            assert!(result.success);
            assert_eq!(result.generated_id, Some(1));
        }

        #[tokio::test]
        async fn publisher_with_empty_name_never_reaches_executor() {
            let executor = MockExecutor::new();
            let gateway = WriteGateway::new(Arc::new(executor));

            let mut fields = demo_publisher();
            fields.name = String::new();
            let result = gateway.insert_publisher(fields).await;

            assert_eq!(
                result,
                Err(InvalidSpecError::EmptyField { field: "name" })
            );
        }

        #[tokio::test]
        async fn concurrent_inserts_on_distinct_executors_both_succeed() {
            let gateway_a = gateway_returning(10);
            let gateway_b = gateway_returning(11);

            let (a, b) = tokio::join!(
                gateway_a.insert_reporter("Tom H", "tommy@example.com"),
                gateway_b.insert_reporter("Ana P", "ana@example.com"),
            );

            let (a, b) = (a.unwrap(), b.unwrap());
            assert!(a.success && b.success);
            assert_ne!(a.generated_id, b.generated_id);
        }

        fn gateway_returning(id: i64) -> WriteGateway {
            let mut executor = MockExecutor::new();
            executor
                .expect_execute_insert()
                .times(1)
                .returning(move |_| Ok(outcome(id)));
            WriteGateway::new(Arc::new(executor))
        }

        fn demo_publisher() -> PublisherFields {
            PublisherFields {
                name: "Prothom Alo".to_string(),
                email: "P_alo@prothomalo.com".to_string(),
                phone_number: "01545464513".to_string(),
                head_office_add: "Chittagong".to_string(),
                website: "www.Paloo.com".to_string(),
                facebook: "www.fb.com/palooo".to_string(),
                twitter: "www.twitter.com/palooo".to_string(),
                linkedin: "www.linkedin.com/palooo".to_string(),
                instagram: "www.instagram.com/palooo".to_string(),
            }
        }
    }
}
