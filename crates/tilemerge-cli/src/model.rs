pub mod tuned_weights;
