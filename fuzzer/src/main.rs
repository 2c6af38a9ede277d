use honggfuzz::fuzz;
use signed_integers::{I128, I256};

fn split_operands(data: &[u8]) -> Option<(i128, i128)> {
	if data.len() < 32 {
		return None;
	}
	let mut a = [0u8; 16];
	let mut b = [0u8; 16];
	a.copy_from_slice(&data[..16]);
	b.copy_from_slice(&data[16..32]);
	Some((i128::from_le_bytes(a), i128::from_le_bytes(b)))
}

fn check_i128(a: i128, b: i128) {
	let (x, y) = (I128::from(a), I128::from(b));

	assert_eq!(x.checked_add(y).ok().map(i128::from), a.checked_add(b));
	assert_eq!(x.checked_sub(y).ok().map(i128::from), a.checked_sub(b));
	assert_eq!(x.checked_mul(y).ok().map(i128::from), a.checked_mul(b));
	assert_eq!(x.checked_div(y).ok().map(i128::from), a.checked_div(b));
	assert_eq!(x.checked_neg().ok().map(i128::from), a.checked_neg());
	assert_eq!(x.cmp(&y), a.cmp(&b));
}

fn check_i256(a: i128, b: i128) {
	let (x, y) = (I256::from(a), I256::from(b));

	// Sums and differences of two i128 always fit in 256 bits.
	let sum = x.checked_add(y).expect("i128 sum fits in I256");
	assert_eq!(i128::try_from(sum).ok(), a.checked_add(b));
	let difference = x.checked_sub(y).expect("i128 difference fits in I256");
	assert_eq!(i128::try_from(difference).ok(), a.checked_sub(b));
	let product = x.checked_mul(y).expect("i128 product fits in I256");
	assert_eq!(i128::try_from(product).ok(), a.checked_mul(b));
	assert_eq!(x.checked_div(y).ok().and_then(|q| i128::try_from(q).ok()), a.checked_div(b));
	assert_eq!(x.to_string(), a.to_string());
	assert_eq!(x.cmp(&y), a.cmp(&b));
}

fn handle_data(data: &[u8]) {
	if let Some((a, b)) = split_operands(data) {
		check_i128(a, b);
		check_i256(a, b);
		#[cfg(not(fuzzing))]
		{
			println!("Checked: {} and {}", a, b);
		}
	}
}

fn main() {
	#[cfg(fuzzing)]
	{
		loop {
			fuzz!(|data: &[u8]| {
				handle_data(data);
			});
		}
	}
	#[cfg(not(fuzzing))]
	{
		use std::env;
		use std::fs;
		use std::fs::File;
		use std::io::Read;
		let args: Vec<_> = env::args().collect();
		let md = fs::metadata(&args[1]).unwrap();
		let all_files = match md.is_dir() {
			true => fs::read_dir(&args[1])
				.unwrap()
				.map(|x| x.unwrap().path().to_str().unwrap().to_string())
				.collect::<Vec<String>>(),
			false => (&args[1..]).to_vec(),
		};
		for argument in all_files {
			println!("Now doing file {:?}", argument);
			let mut buffer: Vec<u8> = Vec::new();
			let mut f = File::open(argument).unwrap();
			f.read_to_end(&mut buffer).unwrap();
			handle_data(buffer.as_slice());
		}
	}
}
