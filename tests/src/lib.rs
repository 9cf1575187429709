#[cfg(test)]
mod cube_token;
