//! Backend trait contract
//!
//! Every backend is consumed as `Box<dyn NamespaceFolder>`, so the trait
//! must stay object safe and its operation set must not shrink.
