use dynvec_vector::{constants::INITIAL_CAPACITY, DynamicArray};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Capacity reached by doubling from the initial capacity until `len` fits.
fn expected_capacity(len: usize) -> usize {
    let mut capacity = INITIAL_CAPACITY;
    while capacity < len {
        capacity *= 2;
    }
    capacity
}

fn assert_matches(array: &DynamicArray, model: &[i32], high_water: usize) {
    assert_eq!(array.size(), model.len());
    assert_eq!(array.is_empty(), model.is_empty());
    assert_eq!(array.capacity(), expected_capacity(high_water));
    for (i, &value) in model.iter().enumerate() {
        assert_eq!(array.at(i), value, "mismatch at index {}", i);
    }
}

#[test]
fn test_random_operations_match_vec() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let mut array = DynamicArray::new().unwrap();
        let mut model: Vec<i32> = Vec::new();
        let mut high_water = 0;

        for _ in 0..500 {
            // Small value range so find/remove hit often
            let value = rng.gen_range(-8..8);
            match rng.gen_range(0..7) {
                0 | 1 => {
                    array.push_back(value);
                    model.push(value);
                }
                2 => {
                    let popped = array.try_pop_back().ok();
                    assert_eq!(popped, model.pop());
                }
                3 => {
                    let index = rng.gen_range(0..model.len() + 4);
                    let erased = array.try_erase(index).is_ok();
                    assert_eq!(erased, index < model.len());
                    if erased {
                        model.remove(index);
                    }
                }
                4 => {
                    array.remove(value);
                    if let Some(index) = model.iter().position(|&x| x == value) {
                        model.remove(index);
                    }
                }
                5 => {
                    let index = rng.gen_range(0..model.len() + 20);
                    array.set(index, value);
                    if index >= model.len() {
                        model.resize(index + 1, 0);
                    }
                    model[index] = value;
                }
                _ => {
                    assert_eq!(array.find(value), model.iter().position(|&x| x == value));
                }
            }

            high_water = high_water.max(model.len());
            assert_matches(&array, &model, high_water);
        }

        array.release();
    }
}
