mod renderenginetest;
