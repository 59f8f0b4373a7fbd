pub mod warm_gradient;
