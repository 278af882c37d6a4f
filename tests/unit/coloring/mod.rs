mod scheme60;
mod strategy;
