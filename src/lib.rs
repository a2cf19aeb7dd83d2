pub mod dist;
pub mod error;
pub mod metrics;
pub mod queue;
pub mod report;
pub mod sim;
pub mod theory;

#[cfg(test)]
mod test;
