/// A single-layer perceptron trying (and failing) to learn XOR.
///
/// XOR is not linearly separable, so no choice of weights classifies all four
/// points; compare with AND, which the same perceptron fits quickly.
///
/// Run with:
///   cargo run --example perceptron_xor
use ferrite_conv::Perceptron;
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];

    for (name, targets) in [("AND", [0.0, 0.0, 0.0, 1.0]), ("XOR", [0.0, 1.0, 1.0, 0.0])] {
        info!("training perceptron on {name}...");
        let mut p = Perceptron::new(2, 0.1);
        let mistakes = match p.fit(&inputs, &targets, 20) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("training failed: {e}");
                std::process::exit(1);
            }
        };
        info!("testing perceptron on {name} ({mistakes} mistakes in last epoch)...");

        for (x, target) in inputs.iter().zip(targets) {
            match p.predict(x) {
                Ok(pred) => info!("data={x:?}, ground-truth={target}, pred={pred}"),
                Err(e) => eprintln!("prediction failed: {e}"),
            }
        }
    }
}
