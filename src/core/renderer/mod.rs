pub mod passthrough;
pub mod strategy;

#[cfg(test)]
mod test;
