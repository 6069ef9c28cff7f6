/// RGBA8 checkerboard, `size` x `size` texels split into `cells` x `cells` squares.
///
/// Cell (cx, cy) uses `a` when `cx + cy` is even, `b` otherwise.
pub fn checkerboard(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> Vec<u8> {
    let cell_size = (size / cells.max(1)).max(1);

    (0..size)
        .flat_map(move |y| {
            (0..size).flat_map(move |x| {
                let even = (x / cell_size + y / cell_size) % 2 == 0;
                if even {
                    a
                } else {
                    b
                }
            })
        })
        .collect()
}

/// Texture for the cubes: wooden-crate browns
pub fn crate_texture(size: u32) -> Vec<u8> {
    checkerboard(size, 8, [181, 136, 84, 255], [120, 84, 48, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 4] = [255, 0, 0, 255];
    const B: [u8; 4] = [0, 0, 255, 255];

    fn texel(data: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn buffer_size_is_rgba() {
        assert_eq!(checkerboard(16, 4, A, B).len(), 16 * 16 * 4);
        assert_eq!(crate_texture(64).len(), 64 * 64 * 4);
    }

    #[test]
    fn cells_alternate() {
        let data = checkerboard(8, 2, A, B);
        assert_eq!(texel(&data, 8, 0, 0), A);
        assert_eq!(texel(&data, 8, 3, 3), A);
        assert_eq!(texel(&data, 8, 4, 0), B);
        assert_eq!(texel(&data, 8, 0, 4), B);
        assert_eq!(texel(&data, 8, 7, 7), A);
    }

    #[test]
    fn zero_cells_is_single_colour() {
        let data = checkerboard(4, 0, A, B);
        // treated as a single cell
        assert!(data.chunks(4).all(|t| t == A));
    }
}
