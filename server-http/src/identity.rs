/// What a service calls itself in its responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceIdentity {
    pub name: &'static str,
    pub health_message: &'static str,
}

impl ServiceIdentity {
    pub const SERVICE_A: ServiceIdentity = ServiceIdentity {
        name: "Service A",
        health_message: "OK",
    };

    pub const SERVICE_B: ServiceIdentity = ServiceIdentity {
        name: "Service B",
        health_message: "Service B is healthy",
    };

    /// `Hello from <name> running on <hostname> at <timestamp>`
    pub fn greeting(&self, hostname: &str, timestamp: &str) -> String {
        format!(
            "Hello from {} running on {} at {}",
            self.name, hostname, timestamp
        )
    }
}
