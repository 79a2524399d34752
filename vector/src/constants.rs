/// Number of slots allocated when an array is created.
pub const INITIAL_CAPACITY: usize = 16;

/// Factor applied to the capacity each time a full array receives a new element.
pub const GROWTH_FACTOR: usize = 2;

/// Index reported by `DynamicArray::find_index` when the value is absent.
pub const NOT_FOUND: isize = -1;
