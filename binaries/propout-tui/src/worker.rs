//! Background bridge between the UI loop and [`ApiClient`].
//!
//! The UI thread never awaits the network: requests go out over a channel,
//! each one runs in its own task, and the app drains responses on tick.
//! Because requests run concurrently, list responses can arrive out of order;
//! every list fetch carries the sequence number it was issued with and the
//! app keeps only the response matching the latest issue for that slot.

use propout_api::{ApiClient, ApiError};
use propout_core::{BookingReceipt, BookingRequest, Property, PropertyFilters};
use tokio::sync::mpsc;
use tracing::warn;

/// Which view a property-list fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Home page strip, fetched once with no filters.
    Featured,
    /// Properties page, keyed by the filter tuple.
    Catalog,
}

#[derive(Debug)]
pub enum ApiRequest {
    FetchProperties {
        seq: u64,
        slot: Slot,
        filters: PropertyFilters,
    },
    FetchProperty {
        id: String,
    },
    SubmitBooking {
        request: BookingRequest,
    },
}

#[derive(Debug)]
pub enum ApiResponse {
    Properties {
        seq: u64,
        slot: Slot,
        result: Result<Vec<Property>, ApiError>,
    },
    Property {
        id: String,
        result: Result<Property, ApiError>,
    },
    Booking {
        result: Result<BookingReceipt, ApiError>,
    },
}

pub struct ApiWorker {
    request_tx: mpsc::Sender<ApiRequest>,
    response_rx: mpsc::Receiver<ApiResponse>,
}

impl ApiWorker {
    pub fn spawn(client: ApiClient) -> Self {
        let (request_tx, mut request_rx) = mpsc::channel::<ApiRequest>(32);
        let (response_tx, response_rx) = mpsc::channel::<ApiResponse>(32);

        tokio::spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let client = client.clone();
                let response_tx = response_tx.clone();
                // One task per request; nothing is cancelled, stale list
                // results are dropped by the receiver instead.
                tokio::spawn(async move {
                    let response = match request {
                        ApiRequest::FetchProperties { seq, slot, filters } => {
                            let result = client.get_properties(&filters).await;
                            ApiResponse::Properties { seq, slot, result }
                        }
                        ApiRequest::FetchProperty { id } => {
                            let result = client.get_property(&id).await;
                            ApiResponse::Property { id, result }
                        }
                        ApiRequest::SubmitBooking { request } => {
                            let result = client.create_booking(&request).await;
                            ApiResponse::Booking { result }
                        }
                    };
                    let _ = response_tx.send(response).await;
                });
            }
        });

        Self {
            request_tx,
            response_rx,
        }
    }

    pub fn send(&self, request: ApiRequest) {
        if self.request_tx.try_send(request).is_err() {
            warn!("api worker queue full, dropping request");
        }
    }

    pub fn try_recv(&mut self) -> Option<ApiResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Worker with no backing task; tests feed responses through the
    /// returned sender and observe requests on the returned receiver.
    #[cfg(test)]
    pub fn stub() -> (Self, mpsc::Receiver<ApiRequest>, mpsc::Sender<ApiResponse>) {
        let (request_tx, request_rx) = mpsc::channel(32);
        let (response_tx, response_rx) = mpsc::channel(32);
        (
            Self {
                request_tx,
                response_rx,
            },
            request_rx,
            response_tx,
        )
    }
}
