use crate::model::{OrderId, Payment, PaymentCreate};
use crate::payment_store::PaymentError;
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the payment store.
#[derive(Clone)]
pub struct PaymentClient {
    inner: StoreClient<Payment>,
}

impl PaymentClient {
    pub fn new(inner: StoreClient<Payment>) -> Self {
        Self { inner }
    }

    /// Records a payment for `order_id`. No gateway is involved: every payment is processed.
    #[instrument(skip(self))]
    pub async fn process_payment(
        &self,
        order_id: OrderId,
        amount: f64,
    ) -> Result<Payment, PaymentError> {
        debug!("Sending request");
        let payment = self.inner.create(PaymentCreate { order_id, amount }).await?;
        info!(payment_id = %payment.payment_id, "Payment processed");
        Ok(payment)
    }
}

#[async_trait]
impl RecordClient<Payment> for PaymentClient {
    type Error = PaymentError;

    fn inner(&self) -> &StoreClient<Payment> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        PaymentError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentId;
    use record_store::mock::{create_mock_client, expect_create};

    #[tokio::test]
    async fn test_process_payment_links_order() {
        let (client, mut receiver) = create_mock_client::<Payment>(10);
        let payment_client = PaymentClient::new(client);

        let task = tokio::spawn(async move {
            payment_client.process_payment(OrderId(3), 99.5).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.order_id, OrderId(3));
        assert_eq!(params.amount, 99.5);

        responder
            .send(Ok(Payment::new(PaymentId(1), params.order_id, params.amount)))
            .unwrap();

        let payment = task.await.unwrap().unwrap();
        assert_eq!(payment.payment_id, PaymentId(1));
        assert_eq!(payment.order_id, OrderId(3));
    }
}
