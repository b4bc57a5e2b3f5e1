mod passthroughtest;
