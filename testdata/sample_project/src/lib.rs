pub struct Counter {
    value: u32,
}

impl Counter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Counter { value: 0 }
    }

    pub fn get(&self) -> u32 {
        self.value
    }
}
