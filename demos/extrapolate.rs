extern crate cost_spline;

use cost_spline::Spline;

fn main() {

    let frequencies = [614400.0, 883200.0, 1036800.0, 1363200.0, 1536000.0, 1670400.0, 1804800.0];
    let costs = [8.0, 14.0, 18.0, 28.0, 35.0, 43.0, 54.0];

    let spline = Spline::from_xy(&frequencies, &costs).unwrap();

    let x_min = 300000.0;
    let x_max = 2400000.0;
    let number_of_steps = 70;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("freq;cost;in_range");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.0};{:.2};{}", x, spline.evaluate(x).unwrap(), spline.is_in_range(x));
    }
}
