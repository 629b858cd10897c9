use crate::application::engine::Bill;
use crate::domain::order::Order;
use crate::error::Result;
use std::io::Write;

/// Writes the end-of-session report as CSV: one ledger row per order, then
/// the bill. Money is rendered with two decimal places, ticket style.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes `order,status,total,can_cancel` rows in creation order.
    pub fn write_orders(&mut self, orders: &[Order]) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
        csv_writer.write_record(["order", "status", "total", "can_cancel"])?;
        for order in orders {
            csv_writer.write_record([
                order.id.to_string(),
                order.status.as_str().to_string(),
                order.total.display_2dp(),
                order.can_cancel().to_string(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the `subtotal,service_fee,total` bill section.
    pub fn write_bill(&mut self, bill: &Bill) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
        csv_writer.write_record(["subtotal", "service_fee", "total"])?;
        csv_writer.write_record([
            bill.subtotal.display_2dp(),
            bill.service_fee.display_2dp(),
            bill.total.display_2dp(),
        ])?;
        csv_writer.flush()?;
        Ok(())
    }
}
