use dense_bits::{BitVec, BitVecError};

fn main() -> Result<(), BitVecError> {
    println!("=== Dense Bits Examples ===\n");

    example_point_ops()?;
    example_resize()?;
    example_ranges_and_scans()?;

    Ok(())
}

fn example_point_ops() -> Result<(), BitVecError> {
    println!("Example 1: Point get/set/unset on a 128-bit vector");

    let mut bv = BitVec::new(128)?;

    println!("  bit 3:   {}", bv.get(3)? as u8);

    bv.set(101)?;
    bv.set(3)?;
    println!("  bit 101: {}", bv.get(101)? as u8);
    println!("  bit 3:   {}", bv.get(3)? as u8);

    bv.unset(3)?;
    println!("  bit 3:   {}", bv.get(3)? as u8);

    // position 129 is past the addressable range
    assert!(bv.set(129).is_err());
    assert!(bv.get(129).is_err());
    println!("  bit 129: out of range");
    println!();

    bv.dispose();
    Ok(())
}

fn example_resize() -> Result<(), BitVecError> {
    println!("Example 2: Growing and shrinking");

    let mut bv = BitVec::new(128)?;
    bv.set(101)?;

    bv.resize(140)?;
    bv.set(129)?;
    println!("  after grow to 140, bit 129: {}", bv.get(129)? as u8);

    bv.resize(107)?;
    assert!(bv.get(129).is_err());
    println!("  after shrink to 107, bit 129: out of range");
    println!("  bit 101 survived: {}", bv.get(101)? as u8);
    println!();

    bv.dispose();
    Ok(())
}

fn example_ranges_and_scans() -> Result<(), BitVecError> {
    println!("Example 3: Range mutation and scans");

    let mut bv = BitVec::new(128)?;
    bv.resize(140)?;

    bv.set_range(62, 90)?;
    println!("  set [62, 90]");
    println!("  lowest set bit:   {}", bv.trailing_zeros());
    println!("  lowest unset bit: {:?}", bv.first_zero());

    bv.unset_range(62, 90)?;
    println!("  cleared [62, 90]");
    println!("  lowest set bit:   {} (= bit count, vector is empty)", bv.trailing_zeros());

    bv.dispose();
    Ok(())
}
