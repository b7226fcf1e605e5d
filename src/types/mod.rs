pub type Quantity = i32;
pub type CustomerId = i32;
