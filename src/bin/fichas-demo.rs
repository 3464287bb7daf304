//! Console walkthrough of the registry, text and value box types.

use fichas::Registry;
use fichas::RegistryError;
use fichas::Text;
use fichas::TextError;
use fichas::ValueBox;

fn registry_demo() -> Result<(), RegistryError> {
  let mut lockers = Registry::new();
  lockers.add_client("Ana", 123)?;
  lockers.add_client("João", 456)?;
  lockers.record_visit(123)?;

  print!("{}", lockers.list_all());

  if let Err(err) = lockers.add_client("Ana", 123) {
    println!("rejected: {err}");
  }

  let mut copy = lockers.clone();
  copy.remove_client(456)?;
  copy.record_visit(123)?;
  println!("copy:");
  print!("{copy}");
  println!("original:");
  print!("{lockers}");

  match lockers.query_client(789) {
    Some(info) => println!("{} has {} visits", info.name(), info.visits()),
    None => println!("client 789 is not registered"),
  }
  Ok(())
}

fn text_demo() -> Result<(), TextError> {
  let mut a = Text::new();
  let mut b = Text::from("Ola");
  b.append("mundo");
  println!("{b}");
  b.remove_range(2, 4)?;
  println!("{b}");

  b.clone_from(&a);
  let mut c = Text::from("abc");
  a.clone_from(&c);
  c.set_char_at(1, 'x')?;
  println!("{c}");
  println!("{a}");
  a.assign("12345");
  println!("{a}");
  Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  registry_demo()?;
  text_demo()?;

  let original = ValueBox::new(10);
  let mut copy = original.clone();
  copy.set(20);
  println!("box: {original}, copy: {copy}");
  Ok(())
}
