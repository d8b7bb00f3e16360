extern crate cost_spline;

use cost_spline::{Sample, Spline};

fn main() {

    let samples = vec![
        Sample::new(633600.0, 68.0),
        Sample::new(902400.0, 103.0),
        Sample::new(1094400.0, 132.0),
        Sample::new(1401600.0, 193.0),
        Sample::new(1555200.0, 233.0),
        Sample::new(1804800.0, 292.0),
        Sample::new(1996000.0, 374.0),
        Sample::new(2016000.0, 377.0)
    ];

    let spline = Spline::new(samples).unwrap();

    let x_min = spline.min_x();
    let x_max = spline.max_x();
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut x_vector = Vec::new();

    for i in 0..=number_of_steps {
        x_vector.push(x_min + step * i as f64);
    }

    let result = spline.batch_evaluate(&x_vector).unwrap();

    println!("freq;cost");
    for i in 0..=number_of_steps {
        println!("{:.0};{:.2}", x_vector[i], result[i]);
    }
}
