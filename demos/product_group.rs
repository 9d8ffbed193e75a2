use fingroup::{make_cyclic_group, make_product_group, make_symmetric_group, InvalidArgument};

fn main() -> Result<(), InvalidArgument> {
    let z2 = make_cyclic_group(2)?;
    let s3 = make_symmetric_group(3)?;
    let prod = make_product_group(&[z2, s3])?;

    println!("{} has {} elements", prod.kind(), prod.order());
    for element in &prod {
        println!("  {}  (order {})", element, element.order());
    }

    let a = &prod.elements()[3];
    let b = &prod.elements()[8];
    match a.multiply(b) {
        Ok(ab) => println!("{} * {} = {}", a, b, ab),
        Err(e) => println!("cannot multiply: {}", e),
    }

    Ok(())
}
