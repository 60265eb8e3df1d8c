use crate::models::booking::{Order, OrderStatus};

pub const STEP_LABELS: [&str; 4] = ["Picked Up", "In Process", "Out for Delivery", "Delivered"];

// A later stage implies all earlier stages: the active steps are always a
// prefix of the progression.
pub fn progress_steps(status: OrderStatus) -> [bool; 4] {
    let mut steps = [false; 4];
    for step in steps.iter_mut().take(status.step_index() + 1) {
        *step = true;
    }
    steps
}

#[derive(Debug, Clone)]
pub struct TrackingPanel {
    pub order: Order,
    pub steps: [bool; 4],
}

impl TrackingPanel {
    pub fn new(order: Order) -> Self {
        Self {
            steps: progress_steps(order.status),
            order,
        }
    }
}
